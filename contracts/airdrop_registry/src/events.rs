use soroban_sdk::{contracttype, symbol_short, Address, Env, U256};

use crate::types::Campaign;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: U256,
    pub creator: Address,
    pub token: Address,
    pub total_amount: U256,
    pub recipient_count: u32,
}

pub fn emit_campaign_created(env: &Env, campaign: &Campaign) {
    let topics = (symbol_short!("created"), campaign.campaign_id.clone());
    let data = CampaignCreated {
        campaign_id: campaign.campaign_id.clone(),
        creator: campaign.creator.clone(),
        token: campaign.token.clone(),
        total_amount: campaign.total_amount.clone(),
        recipient_count: campaign.recipient_count,
    };
    env.events().publish(topics, data);
}
