//! Stable Engine Contract
//!
//! Collateral custody, debt issuance and liquidation for a USD-pegged token.
//! Users deposit listed collateral, mint debt against it and must keep their
//! health factor at or above 1.0 (200% collateralization). Unhealthy
//! positions can be partially repaid by anyone in exchange for collateral at
//! a 10% bonus.
//!
//! Flow of every mutating entry point:
//! 1. Take the reentrancy lock
//! 2. Validate inputs (guards)
//! 3. Update ledgers and emit events
//! 4. Call token collaborators
//! 5. Re-check solvency where the action could weaken the position
//! 6. Release the lock
//!
//! Any revert discards the whole call, including the lock.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::asset_registry::AssetRegistry;
use crate::collateral_ledger::CollateralLedger;
use crate::debt_ledger::DebtLedger;
use crate::errors::EngineError;
use crate::events::{
    AssetRegistered, AssetUnregistered, CollateralDeposited, CollateralRedeemed, DebtBurned,
    DebtMinted, Liquidation,
};
use crate::guards;
use crate::interfaces::Cep18TokenContractRef;
use crate::liquidation::{self, LIQUIDATION_BONUS};
use crate::math::PRECISION;
use crate::price_oracle::PriceOracleAdapter;
use crate::reentrancy::ReentrancyGuard;
use crate::solvency::{self, LIQUIDATION_THRESHOLD, MIN_HEALTH_FACTOR};
use crate::types::{AccountInfo, CollateralAsset, LiquidationQuote, LiquidationStats};

/// Stable Engine Contract
#[odra::module(events = [
    AssetRegistered,
    AssetUnregistered,
    CollateralDeposited,
    CollateralRedeemed,
    DebtMinted,
    DebtBurned,
    Liquidation
])]
pub struct StableEngine {
    /// Protocol admin address
    admin: Var<Address>,
    /// Debt token contract address
    debt_token: Var<Address>,
    /// Listed collateral assets
    registry: SubModule<AssetRegistry>,
    /// Price normalization and freshness checks
    oracle: SubModule<PriceOracleAdapter>,
    /// Deposited collateral per user
    ledger: SubModule<CollateralLedger>,
    /// Minted debt per user
    debts: SubModule<DebtLedger>,
    /// Lock held for the duration of a mutating call
    guard: SubModule<ReentrancyGuard>,
    /// Cumulative liquidation statistics
    stats: Var<LiquidationStats>,
}

#[odra::module]
impl StableEngine {
    /// Initialize with the debt token and the initial collateral listing.
    /// The caller becomes admin.
    pub fn init(&mut self, debt_token: Address, tokens: Vec<Address>, price_feeds: Vec<Address>) {
        self.ensure(guards::non_null(&debt_token));
        self.admin.set(self.env().caller());
        self.debt_token.set(debt_token);
        self.stats.set(LiquidationStats::default());
        self.registry.register_batch(tokens, price_feeds);
    }

    // ========== Collateral Functions ==========

    /// Deposit `amount` of `token` as collateral. Requires a prior approval
    /// of the engine on the token.
    pub fn deposit(&mut self, token: Address, amount: U256) {
        self.guard.enter();
        let caller = self.env().caller();
        self.deposit_collateral(caller, token, amount);
        self.guard.exit();
    }

    /// Withdraw `amount` of `token`. Reverts if the position ends unhealthy.
    pub fn redeem(&mut self, token: Address, amount: U256) {
        self.guard.enter();
        let caller = self.env().caller();
        self.redeem_collateral(token, amount, caller, caller);
        self.require_healthy(caller);
        self.guard.exit();
    }

    /// Deposit collateral and mint debt in one call.
    pub fn deposit_and_mint(&mut self, token: Address, collateral_amount: U256, mint_amount: U256) {
        self.guard.enter();
        let caller = self.env().caller();
        self.deposit_collateral(caller, token, collateral_amount);
        self.mint_debt(caller, mint_amount);
        self.guard.exit();
    }

    /// Burn debt and withdraw collateral in one call.
    pub fn redeem_after_burn(&mut self, token: Address, collateral_amount: U256, burn_amount: U256) {
        self.guard.enter();
        let caller = self.env().caller();
        self.burn_debt(caller, caller, burn_amount);
        self.redeem_collateral(token, collateral_amount, caller, caller);
        self.require_healthy(caller);
        self.guard.exit();
    }

    // ========== Debt Functions ==========

    /// Mint `amount` of debt token to the caller.
    pub fn mint(&mut self, amount: U256) {
        self.guard.enter();
        let caller = self.env().caller();
        self.mint_debt(caller, amount);
        self.guard.exit();
    }

    /// Repay `amount` of the caller's debt. Requires a prior approval of the
    /// engine on the debt token.
    pub fn burn(&mut self, amount: U256) {
        self.guard.enter();
        let caller = self.env().caller();
        self.burn_debt(caller, caller, amount);
        self.guard.exit();
    }

    // ========== Liquidation Functions ==========

    /// Repay `debt_to_cover` of `debtor`'s debt and receive the equivalent
    /// `token` collateral plus the liquidation bonus.
    ///
    /// The caller must hold and have approved `debt_to_cover` debt tokens.
    /// Partial liquidation is allowed; the debtor does not need to end healthy.
    pub fn liquidate(&mut self, token: Address, debtor: Address, debt_to_cover: U256) {
        self.guard.enter();
        self.ensure(guards::amount_positive(debt_to_cover));
        self.registry.require_accepted(token);
        let liquidator = self.env().caller();

        if solvency::is_healthy(self.health_factor(debtor)) {
            self.env().revert(EngineError::CannotLiquidateHealthyPosition);
        }

        self.ensure(liquidation::check_repayment(
            debt_to_cover,
            self.debts.minted_debt(debtor),
        ));
        let quote = self.liquidation_quote(token, debt_to_cover);
        self.ensure(liquidation::check_seizure(
            &quote,
            self.ledger.deposited(debtor, token),
        ));

        self.ledger.debit(debtor, token, quote.total_collateral);
        self.debts.decrease(debtor, debt_to_cover);

        let mut stats = self.liquidation_stats();
        stats.total_liquidations += 1;
        stats.total_debt_covered = stats.total_debt_covered.saturating_add(debt_to_cover);
        self.stats.set(stats);

        self.env().emit_event(Liquidation {
            debtor,
            liquidator,
            token,
            debt_covered: debt_to_cover,
            collateral_seized: quote.total_collateral,
        });

        let mut collateral = self.token_ref(token);
        if !collateral.transfer(liquidator, quote.total_collateral) {
            self.env().revert(EngineError::TransferFailed);
        }
        self.settle_burn(liquidator, debt_to_cover);
        self.guard.exit();
    }

    // ========== Admin Functions ==========

    /// List a collateral asset or replace its price source (admin only).
    pub fn register_asset(&mut self, token: Address, price_feed: Address) {
        self.guard.enter();
        self.require_admin();
        self.registry.register(token, price_feed);
        self.guard.exit();
    }

    /// List several collateral assets in order (admin only).
    pub fn register_batch(&mut self, tokens: Vec<Address>, price_feeds: Vec<Address>) {
        self.guard.enter();
        self.require_admin();
        self.registry.register_batch(tokens, price_feeds);
        self.guard.exit();
    }

    /// Delist a collateral asset (admin only). The engine must hold none of it.
    pub fn unregister_asset(&mut self, token: Address) {
        self.guard.enter();
        self.require_admin();
        let custody = if self.registry.is_registered(token) {
            self.custody_of(token)
        } else {
            U256::zero()
        };
        self.registry.unregister(token, custody);
        self.guard.exit();
    }

    pub fn set_min_active_assets(&mut self, min_active_assets: u32) {
        self.guard.enter();
        self.require_admin();
        self.registry.set_min_active_assets(min_active_assets);
        self.guard.exit();
    }

    pub fn set_max_price_age(&mut self, seconds: u64) {
        self.guard.enter();
        self.require_admin();
        self.oracle.set_max_price_age(seconds);
        self.guard.exit();
    }

    pub fn transfer_admin(&mut self, new_admin: Address) {
        self.guard.enter();
        self.require_admin();
        self.ensure(guards::non_null(&new_admin));
        self.admin.set(new_admin);
        self.guard.exit();
    }

    // ========== Query Functions ==========

    /// Health factor of `user` (1e18 = 1.0). Debt-free users get `U256::MAX`.
    pub fn health_factor(&self, user: Address) -> U256 {
        let debt = self.debts.minted_debt(user);
        if debt.is_zero() {
            return U256::MAX;
        }
        solvency::calculate_health_factor(debt, self.total_collateral_usd(user))
    }

    /// Revert with `UnhealthyPosition` if `user` is below the minimum health factor.
    pub fn assert_healthy(&self, user: Address) {
        self.require_healthy(user);
    }

    pub fn is_liquidatable(&self, user: Address) -> bool {
        !solvency::is_healthy(self.health_factor(user))
    }

    /// USD value (18 decimals) of everything `user` has deposited.
    pub fn total_collateral_usd(&self, user: Address) -> U256 {
        let mut total = U256::zero();
        for token in self.registry.active_assets() {
            let amount = self.ledger.deposited(user, token);
            if amount.is_zero() {
                continue;
            }
            let asset = self.registry.require_accepted(token);
            total = total.saturating_add(self.oracle.usd_value(asset, amount));
        }
        total
    }

    pub fn account_information(&self, user: Address) -> AccountInfo {
        let total_debt = self.debts.minted_debt(user);
        let collateral_value_usd = self.total_collateral_usd(user);
        AccountInfo {
            total_debt,
            collateral_value_usd,
            health_factor: solvency::calculate_health_factor(total_debt, collateral_value_usd),
        }
    }

    /// Health factor for arbitrary debt and collateral values.
    pub fn calculate_health_factor(&self, total_debt: U256, collateral_value_usd: U256) -> U256 {
        solvency::calculate_health_factor(total_debt, collateral_value_usd)
    }

    pub fn usd_value(&self, token: Address, amount: U256) -> U256 {
        let asset = self.registry.require_accepted(token);
        self.oracle.usd_value(asset, amount)
    }

    pub fn token_amount_from_usd(&self, token: Address, usd_amount: U256) -> U256 {
        let asset = self.registry.require_accepted(token);
        self.oracle.token_amount_from_usd(asset, usd_amount)
    }

    /// Collateral a liquidator would receive for repaying `debt_to_cover`.
    pub fn liquidation_quote(&self, token: Address, debt_to_cover: U256) -> LiquidationQuote {
        let asset = self.registry.require_accepted(token);
        let price = self.oracle.latest_usd_price(asset);
        match liquidation::quote(price, debt_to_cover) {
            Ok(quote) => quote,
            Err(error) => self.env().revert(error),
        }
    }

    pub fn deposited(&self, user: Address, token: Address) -> U256 {
        self.ledger.deposited(user, token)
    }

    pub fn total_deposited(&self, token: Address) -> U256 {
        self.ledger.total_deposited(token)
    }

    pub fn minted_debt(&self, user: Address) -> U256 {
        self.debts.minted_debt(user)
    }

    pub fn total_debt(&self) -> U256 {
        self.debts.total_debt()
    }

    /// Listed collateral tokens. Order changes when an asset is delisted.
    pub fn active_assets(&self) -> Vec<Address> {
        self.registry.active_assets()
    }

    pub fn collateral_asset(&self, token: Address) -> Option<CollateralAsset> {
        self.registry.asset(token)
    }

    pub fn price_feed_of(&self, token: Address) -> Option<Address> {
        self.registry.asset(token).map(|asset| asset.price_feed)
    }

    pub fn liquidation_stats(&self) -> LiquidationStats {
        self.stats.get_or_default()
    }

    pub fn liquidation_threshold(&self) -> u64 {
        LIQUIDATION_THRESHOLD
    }

    pub fn liquidation_bonus(&self) -> u64 {
        LIQUIDATION_BONUS
    }

    pub fn min_health_factor(&self) -> U256 {
        U256::from(MIN_HEALTH_FACTOR)
    }

    pub fn precision(&self) -> U256 {
        U256::from(PRECISION)
    }

    pub fn max_price_age(&self) -> u64 {
        self.oracle.max_price_age()
    }

    pub fn min_active_assets(&self) -> u32 {
        self.registry.min_active_assets()
    }

    pub fn debt_token(&self) -> Option<Address> {
        self.debt_token.get()
    }

    pub fn admin(&self) -> Option<Address> {
        self.admin.get()
    }

    // ========== Internal Functions ==========

    fn deposit_collateral(&mut self, user: Address, token: Address, amount: U256) {
        self.ensure(guards::amount_positive(amount));
        self.registry.require_accepted(token);

        self.ledger.credit(user, token, amount);
        self.env().emit_event(CollateralDeposited { user, token, amount });

        let engine = self.env().self_address();
        let mut collateral = self.token_ref(token);
        if !collateral.transfer_from(user, engine, amount) {
            self.env().revert(EngineError::TransferFailed);
        }
    }

    fn redeem_collateral(&mut self, token: Address, amount: U256, from: Address, to: Address) {
        self.registry.require_accepted(token);
        self.ensure(guards::amount_positive(amount));

        self.ledger.debit(from, token, amount);
        self.env().emit_event(CollateralRedeemed {
            from,
            to,
            token,
            amount,
        });

        let mut collateral = self.token_ref(token);
        if !collateral.transfer(to, amount) {
            self.env().revert(EngineError::TransferFailed);
        }
    }

    fn mint_debt(&mut self, user: Address, amount: U256) {
        self.ensure(guards::amount_positive(amount));

        let new_debt = self.debts.increase(user, amount);
        self.require_healthy(user);
        self.env().emit_event(DebtMinted {
            user,
            amount,
            new_debt,
        });

        let mut debt_token = self.token_ref(self.debt_token_address());
        if !debt_token.mint(user, amount) {
            self.env().revert(EngineError::MintFailed);
        }
    }

    fn burn_debt(&mut self, on_behalf_of: Address, payer: Address, amount: U256) {
        self.ensure(guards::amount_positive(amount));

        let new_debt = self.debts.decrease(on_behalf_of, amount);
        self.env().emit_event(DebtBurned {
            on_behalf_of,
            payer,
            amount,
            new_debt,
        });

        self.settle_burn(payer, amount);
    }

    /// Pull `amount` debt tokens from `payer` into the engine and destroy them.
    fn settle_burn(&mut self, payer: Address, amount: U256) {
        let engine = self.env().self_address();
        let mut debt_token = self.token_ref(self.debt_token_address());
        if !debt_token.transfer_from(payer, engine, amount) {
            self.env().revert(EngineError::BurnFailed);
        }
        if !debt_token.burn(amount) {
            self.env().revert(EngineError::BurnFailed);
        }
    }

    fn require_healthy(&self, user: Address) {
        self.ensure(solvency::require_healthy(self.health_factor(user)));
    }

    fn custody_of(&self, token: Address) -> U256 {
        self.token_ref(token).balance_of(self.env().self_address())
    }

    fn token_ref(&self, token: Address) -> Cep18TokenContractRef {
        Cep18TokenContractRef::new(self.env().clone(), token)
    }

    fn debt_token_address(&self) -> Address {
        match self.debt_token.get() {
            Some(address) => address,
            None => self.env().revert(EngineError::InvalidConfig),
        }
    }

    fn require_admin(&self) {
        if self.admin.get() != Some(self.env().caller()) {
            self.env().revert(EngineError::Unauthorized);
        }
    }

    fn ensure(&self, check: Result<(), EngineError>) {
        if let Err(error) = check {
            self.env().revert(error);
        }
    }
}
