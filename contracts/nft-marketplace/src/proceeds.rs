use crate::events;
use crate::guards::*;
use crate::*;

#[near]
impl Contract {
    /// Sends the caller's whole proceeds balance to the caller.
    #[payable]
    #[handle_result]
    pub fn withdraw_proceeds(&mut self) -> Result<Promise, MarketplaceError> {
        check_one_yocto()?;
        let account_id = env::predecessor_account_id();
        let amount = self.proceeds.remove(&account_id).unwrap_or(0);
        if amount == 0 {
            return Err(MarketplaceError::NotProceeds);
        }

        Ok(Promise::new(account_id.clone())
            .transfer(NearToken::from_yoctonear(amount))
            .then(
                Contract::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_WITHDRAW_CALLBACK_TGAS))
                    .on_proceeds_withdrawn(account_id, U128(amount)),
            ))
    }

    #[private]
    pub fn on_proceeds_withdrawn(&mut self, account_id: AccountId, amount: U128) -> bool {
        if !matches!(
            env::promise_result_checked(0, MAX_TRANSFER_RESULT_LEN),
            Err(near_sdk::PromiseError::Failed)
        ) {
            events::emit_proceeds_withdrawn(&account_id, amount.0);
            return true;
        }
        self.credit_proceeds(&account_id, amount.0);
        env::log_str(&format!(
            "Proceeds transfer to {} failed, {} restored",
            account_id, amount.0
        ));
        false
    }
}

impl Contract {
    pub(crate) fn credit_proceeds(&mut self, account_id: &AccountId, amount: u128) {
        let balance = self.proceeds.get(account_id).copied().unwrap_or(0);
        self.proceeds
            .insert(account_id.clone(), balance.saturating_add(amount));
    }
}
