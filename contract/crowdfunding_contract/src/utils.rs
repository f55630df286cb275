use soroban_sdk::Env;

use crate::storage_types::{Campaign, CampaignStatus};

/// Check if timestamp is in the future
pub fn is_future(env: &Env, timestamp: u64) -> bool {
    env.ledger().timestamp() < timestamp
}

/// True once the ledger clock is at or past `deadline`.
pub fn deadline_reached(env: &Env, deadline: u64) -> bool {
    env.ledger().timestamp() >= deadline
}

pub fn target_reached(campaign: &Campaign) -> bool {
    campaign.amount_collected >= campaign.target_amount
}

/// Share of the target collected, in whole percent, clamped to 0..=100.
pub fn progress_percent(collected: i128, target: i128) -> u32 {
    if target <= 0 || collected <= 0 {
        return 0;
    }
    if collected >= target {
        return 100;
    }

    let percent = match collected.checked_mul(100) {
        Some(scaled) => scaled / target,
        None => collected / (target / 100),
    };
    percent.clamp(0, 100) as u32
}

// Only a withdrawal closes a campaign, and withdrawal requires the target.
pub fn campaign_status(env: &Env, campaign: &Campaign) -> CampaignStatus {
    if campaign.is_closed {
        CampaignStatus::Successful
    } else if deadline_reached(env, campaign.deadline) {
        CampaignStatus::Expired
    } else {
        CampaignStatus::Active
    }
}
