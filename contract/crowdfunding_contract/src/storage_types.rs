use soroban_sdk::{contracterror, contracttype, Address, String};

pub type CampaignId = u64;

// Instance storage holds configuration and the registry length,
// persistent storage holds one entry per campaign and per (campaign, donor).
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    CampaignCount,
    Campaign(CampaignId),
    Donation(CampaignId, Address),
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub target_amount: i128,
    pub deadline: u64,
    pub amount_collected: i128,
    pub is_closed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[contracttype]
pub enum CampaignStatus {
    Active,
    Expired,
    Successful,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidCampaignParams = 3,
    CampaignNotFound = 4,
    CampaignClosed = 5,
    AlreadyClosed = 6,
    Unauthorized = 7,
    DeadlineNotReached = 8,
    DeadlinePassed = 9,
    TargetNotReached = 10,
    TargetReached = 11,
    NothingToRefund = 12,
    TransferFailure = 13,
    InvalidAmount = 14,
    ArithmeticError = 15,
}

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
pub const MAX_PAGE_SIZE: u32 = 50;
