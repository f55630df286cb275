use soroban_sdk::{Address, Env};

use crate::storage_types::{Campaign, CampaignId, DataKey, Error, TTL_INSTANCE, TTL_PERSISTENT};

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

pub fn require_initialized(env: &Env) -> Result<(), Error> {
    if !is_initialized(env) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    extend_instance(env);
}

pub fn admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    extend_instance(env);
}

pub fn token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

/// Registry length; also the id the next campaign receives.
pub fn campaign_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

pub fn set_campaign_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::CampaignCount, &count);
    extend_instance(env);
}

pub fn find_campaign(env: &Env, campaign_id: CampaignId) -> Option<Campaign> {
    if campaign_id >= campaign_count(env) {
        return None;
    }
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(campaign_id))
}

pub fn load_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
    find_campaign(env, campaign_id).ok_or(Error::CampaignNotFound)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.id);
    env.storage().persistent().set(&key, campaign);
    extend_persistent(env, &key);
}

/// Outstanding (donated and not refunded) amount; a missing entry reads as 0.
pub fn donation(env: &Env, campaign_id: CampaignId, donor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Donation(campaign_id, donor.clone()))
        .unwrap_or(0)
}

pub fn set_donation(env: &Env, campaign_id: CampaignId, donor: &Address, amount: i128) {
    let key = DataKey::Donation(campaign_id, donor.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

pub fn clear_donation(env: &Env, campaign_id: CampaignId, donor: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Donation(campaign_id, donor.clone()));
}
