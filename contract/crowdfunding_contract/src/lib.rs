#![no_std]

mod escrow;
mod events;
mod ledger;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use storage_types::{Campaign, CampaignId, CampaignStatus, Error, MAX_PAGE_SIZE};
pub use utils::*;

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Initialize the contract with admin and the token used to hold escrowed funds
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if ledger::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        ledger::set_admin(&env, &admin);
        ledger::set_token(&env, &token);
        ledger::set_campaign_count(&env, 0);

        log!(&env, "crowdfunding initialized", token);
        Ok(())
    }

    /// Create a new campaign; returns its id
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        target_amount: i128,
        deadline: u64,
    ) -> Result<CampaignId, Error> {
        creator.require_auth();
        ledger::require_initialized(&env)?;

        if title.is_empty()
            || description.is_empty()
            || target_amount <= 0
            || !utils::is_future(&env, deadline)
        {
            return Err(Error::InvalidCampaignParams);
        }

        let campaign_id = ledger::campaign_count(&env);
        let campaign = Campaign {
            id: campaign_id,
            creator: creator.clone(),
            title,
            description,
            target_amount,
            deadline,
            amount_collected: 0,
            is_closed: false,
        };

        ledger::save_campaign(&env, &campaign);
        ledger::set_campaign_count(&env, campaign_id + 1);

        log!(&env, "campaign created", campaign_id, target_amount, deadline);
        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id,
                creator,
                target_amount,
                deadline,
            },
        );

        Ok(campaign_id)
    }

    /// Donate `amount` of the configured token into a campaign's escrow
    pub fn donate_to_campaign(
        env: Env,
        campaign_id: CampaignId,
        donor: Address,
        amount: i128,
    ) -> Result<(), Error> {
        donor.require_auth();
        ledger::require_initialized(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut campaign = ledger::load_campaign(&env, campaign_id)?;
        if campaign.is_closed {
            return Err(Error::CampaignClosed);
        }
        if utils::deadline_reached(&env, campaign.deadline) {
            return Err(Error::DeadlinePassed);
        }

        campaign.amount_collected = campaign
            .amount_collected
            .checked_add(amount)
            .ok_or(Error::ArithmeticError)?;
        let outstanding = ledger::donation(&env, campaign_id, &donor)
            .checked_add(amount)
            .ok_or(Error::ArithmeticError)?;

        escrow::pull_into_escrow(&env, &donor, amount)?;

        ledger::save_campaign(&env, &campaign);
        ledger::set_donation(&env, campaign_id, &donor, outstanding);

        log!(&env, "donation received", campaign_id, amount);
        events::emit_donation(
            &env,
            events::DonationEvent {
                campaign_id,
                donor,
                amount,
            },
        );

        Ok(())
    }

    /// Creator withdraws everything collected once the deadline passed with the target met
    pub fn withdraw_funds(env: Env, campaign_id: CampaignId, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        ledger::require_initialized(&env)?;

        let mut campaign = ledger::load_campaign(&env, campaign_id)?;
        if caller != campaign.creator {
            return Err(Error::Unauthorized);
        }
        if campaign.is_closed {
            return Err(Error::AlreadyClosed);
        }
        if !utils::deadline_reached(&env, campaign.deadline) {
            return Err(Error::DeadlineNotReached);
        }
        if !utils::target_reached(&campaign) {
            return Err(Error::TargetNotReached);
        }

        // Closed flag is committed before any funds leave escrow.
        campaign.is_closed = true;
        ledger::save_campaign(&env, &campaign);

        let amount = campaign.amount_collected;
        escrow::release_from_escrow(&env, &campaign.creator, amount)?;

        log!(&env, "funds withdrawn", campaign_id, amount);
        events::emit_funds_withdrawn(
            &env,
            events::FundsWithdrawnEvent {
                campaign_id,
                creator: campaign.creator,
                amount,
            },
        );

        Ok(amount)
    }

    /// Donor reclaims their whole outstanding donation from a campaign that missed its target
    pub fn refund(env: Env, campaign_id: CampaignId, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        ledger::require_initialized(&env)?;

        let mut campaign = ledger::load_campaign(&env, campaign_id)?;
        if campaign.is_closed {
            return Err(Error::CampaignClosed);
        }
        if !utils::deadline_reached(&env, campaign.deadline) {
            return Err(Error::DeadlineNotReached);
        }
        if utils::target_reached(&campaign) {
            return Err(Error::TargetReached);
        }

        let amount = ledger::donation(&env, campaign_id, &caller);
        if amount <= 0 {
            return Err(Error::NothingToRefund);
        }

        // Ledger entry is zeroed before the transfer back to the donor.
        ledger::clear_donation(&env, campaign_id, &caller);
        campaign.amount_collected = campaign
            .amount_collected
            .checked_sub(amount)
            .ok_or(Error::ArithmeticError)?;
        ledger::save_campaign(&env, &campaign);

        escrow::release_from_escrow(&env, &caller, amount)?;

        log!(&env, "refund issued", campaign_id, amount);
        events::emit_refund_issued(
            &env,
            events::RefundIssuedEvent {
                campaign_id,
                donor: caller,
                amount,
            },
        );

        Ok(amount)
    }

    /// View functions
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
        ledger::load_campaign(&env, campaign_id)
    }

    pub fn get_all_campaigns(env: Env) -> Vec<Campaign> {
        let mut campaigns = Vec::new(&env);
        for campaign_id in 0..ledger::campaign_count(&env) {
            if let Some(campaign) = ledger::find_campaign(&env, campaign_id) {
                campaigns.push_back(campaign);
            }
        }
        campaigns
    }

    /// Up to `limit` campaigns starting at id `start`, in creation order
    pub fn get_campaigns(env: Env, start: CampaignId, limit: u32) -> Vec<Campaign> {
        let mut campaigns = Vec::new(&env);
        let end = start
            .saturating_add(limit.min(MAX_PAGE_SIZE) as u64)
            .min(ledger::campaign_count(&env));
        for campaign_id in start..end {
            if let Some(campaign) = ledger::find_campaign(&env, campaign_id) {
                campaigns.push_back(campaign);
            }
        }
        campaigns
    }

    pub fn get_donation(env: Env, campaign_id: CampaignId, donor: Address) -> i128 {
        ledger::donation(&env, campaign_id, &donor)
    }

    pub fn get_campaign_count(env: Env) -> u64 {
        ledger::campaign_count(&env)
    }

    /// Presentation status: Active, Expired (deadline passed, still open) or Successful
    pub fn get_campaign_status(env: Env, campaign_id: CampaignId) -> Result<CampaignStatus, Error> {
        let campaign = ledger::load_campaign(&env, campaign_id)?;
        Ok(utils::campaign_status(&env, &campaign))
    }

    /// Percent of the target collected, clamped to 100
    pub fn get_progress(env: Env, campaign_id: CampaignId) -> Result<u32, Error> {
        let campaign = ledger::load_campaign(&env, campaign_id)?;
        Ok(utils::progress_percent(
            campaign.amount_collected,
            campaign.target_amount,
        ))
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        ledger::token(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        ledger::admin(&env)
    }
}
