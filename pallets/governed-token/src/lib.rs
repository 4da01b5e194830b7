#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are deprecated upstream but remain the read API integrators use
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Governed Token Pallet
//!
//! A fungible token ledger whose issuance and circulation can be centrally
//! controlled:
//!
//! - a single **authority** account may `mint`, `pause` and `unpause`;
//! - while **paused**, `transfer` and `transfer_from` are rejected, while
//!   minting, burning and approvals keep working;
//! - any holder may `burn` their own tokens, and a spender may `burn_from`
//!   an owner within its allowance.
//!
//! The ledger starts uninitialized. `initialize` (or the genesis config, or
//! [`migrations::v1::MigrateToV1`] on a live chain) assigns the authority
//! exactly once; every later attempt fails with `AlreadyInitialized`.
//!
//! All checks of a dispatchable run before its first storage write, so a
//! rejected call leaves balances, allowances and supply untouched.

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod migrations;
pub mod weights;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::governed-token";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Origin allowed to run the one-shot `initialize` (the deploying or upgrading party).
        type InitializeOrigin: EnsureOrigin<Self::RuntimeOrigin>;
        /// Weight information for extrinsics.
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "HODLpac Governance")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "HPG")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply, always equal to the sum of all balances
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending limits, keyed by (owner, spender)
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// The only account allowed to mint, pause and unpause. `None` until initialized.
    #[pallet::storage]
    #[pallet::getter(fn authority)]
    pub type Authority<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Whether transfers are currently halted
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Set by the first successful initialization and never cleared
    #[pallet::storage]
    #[pallet::getter(fn is_initialized)]
    pub type Initialized<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Ledger initialized with its issuing authority
        Initialized { authority: T::AccountId },
        /// Issuing authority replaced through the handoff path
        AuthoritySet { old: Option<T::AccountId>, new: T::AccountId },
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens destroyed
        Burned { from: T::AccountId, amount: u128 },
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Allowance of `spender` over `owner`'s tokens is now `amount`
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Transfers halted
        Paused { by: T::AccountId },
        /// Transfers resumed
        Unpaused { by: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the issuing authority
        Unauthorized,
        /// Transfers are paused
        Paused,
        /// Unpause requested while transfers are not paused
        NotPaused,
        /// Pause requested while transfers are already paused
        AlreadyPaused,
        /// Balance lower than the requested amount
        InsufficientBalance,
        /// Allowance lower than the requested amount
        InsufficientAllowance,
        /// The ledger has already been initialized
        AlreadyInitialized,
        /// The ledger has not been initialized yet
        NotInitialized,
        /// Supply, balance or allowance would exceed `u128::MAX`
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// One-shot setup replacing a constructor. Assigns the issuing authority,
        /// leaves transfers unpaused and the supply at zero.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::initialize())]
        pub fn initialize(origin: OriginFor<T>, authority: T::AccountId) -> DispatchResult {
            T::InitializeOrigin::ensure_origin(origin)?;
            ensure!(!Initialized::<T>::get(), Error::<T>::AlreadyInitialized);

            Self::initialize_ledger(&authority);
            Self::deposit_event(Event::Initialized { authority });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_authority(&who)?;

            Self::do_mint(&to, amount)?;
            Self::deposit_event(Event::Minted { to, amount });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Self::do_burn(&who, amount)?;
            Self::deposit_event(Event::Burned { from: who, amount });
            Ok(())
        }

        /// Burn `amount` of `from`'s tokens, spending the caller's allowance.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::burn_from())]
        pub fn burn_from(origin: OriginFor<T>, from: T::AccountId, amount: u128) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            let remaining = Self::remaining_allowance(&from, &spender, amount)?;

            Self::do_burn(&from, amount)?;
            Allowances::<T>::insert(&from, &spender, remaining);
            Self::deposit_event(Event::Burned { from, amount });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;

            Self::do_transfer(&sender, &to, amount)?;
            Self::deposit_event(Event::Transferred { from: sender, to, amount });
            Ok(())
        }

        /// Move `amount` from `from` to `to`, spending the caller's allowance.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            let remaining = Self::remaining_allowance(&from, &spender, amount)?;

            Self::do_transfer(&from, &to, amount)?;
            Allowances::<T>::insert(&from, &spender, remaining);
            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }

        /// Set the caller's allowance for `spender` to exactly `amount`.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;

            Self::set_allowance(owner, spender, amount);
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_authority(&who)?;
            ensure!(!Paused::<T>::get(), Error::<T>::AlreadyPaused);

            Paused::<T>::put(true);
            log::info!(target: LOG_TARGET, "Transfers paused by {who:?}");
            Self::deposit_event(Event::Paused { by: who });
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_authority(&who)?;
            ensure!(Paused::<T>::get(), Error::<T>::NotPaused);

            Paused::<T>::put(false);
            log::info!(target: LOG_TARGET, "Transfers resumed by {who:?}");
            Self::deposit_event(Event::Unpaused { by: who });
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::increase_allowance())]
        pub fn increase_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            added: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            let amount = Allowances::<T>::get(&owner, &spender)
                .checked_add(added)
                .ok_or(Error::<T>::Overflow)?;

            Self::set_allowance(owner, spender, amount);
            Ok(())
        }

        /// Lower the caller's allowance for `spender`. Fails instead of going below zero.
        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::decrease_allowance())]
        pub fn decrease_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            subtracted: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            let amount = Self::remaining_allowance(&owner, &spender, subtracted)?;

            Self::set_allowance(owner, spender, amount);
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Fails with `Unauthorized` unless `who` is the current authority.
        pub fn ensure_authority(who: &T::AccountId) -> DispatchResult {
            ensure!(Authority::<T>::get().as_ref() == Some(who), Error::<T>::Unauthorized);
            Ok(())
        }

        /// Fails with `Paused` while transfers are halted.
        pub fn ensure_not_paused() -> DispatchResult {
            ensure!(!Paused::<T>::get(), Error::<T>::Paused);
            Ok(())
        }

        /// Replace the issuing authority.
        ///
        /// This is the entry point for the ownership-handoff process living
        /// outside this pallet. No dispatchable of this pallet calls it.
        pub fn set_authority(new: T::AccountId) -> DispatchResult {
            ensure!(Initialized::<T>::get(), Error::<T>::NotInitialized);

            let old = Authority::<T>::get();
            Authority::<T>::put(&new);
            log::info!(target: LOG_TARGET, "Authority changed from {old:?} to {new:?}");
            Self::deposit_event(Event::AuthoritySet { old, new });
            Ok(())
        }

        /// Shared by `initialize`, genesis and the v1 migration. Callers check
        /// `Initialized` first.
        pub(crate) fn initialize_ledger(authority: &T::AccountId) {
            Authority::<T>::put(authority);
            Paused::<T>::put(false);
            Initialized::<T>::put(true);
            log::info!(target: LOG_TARGET, "Ledger initialized, authority {authority:?}");
        }

        fn remaining_allowance(
            owner: &T::AccountId,
            spender: &T::AccountId,
            amount: u128,
        ) -> Result<u128, DispatchError> {
            Allowances::<T>::get(owner, spender)
                .checked_sub(amount)
                .ok_or_else(|| Error::<T>::InsufficientAllowance.into())
        }

        fn set_allowance(owner: T::AccountId, spender: T::AccountId, amount: u128) {
            Allowances::<T>::insert(&owner, &spender, amount);
            log::debug!(target: LOG_TARGET, "Allowance {owner:?} -> {spender:?} set to {amount}");
            Self::deposit_event(Event::Approval { owner, spender, amount });
        }

        fn do_mint(to: &T::AccountId, amount: u128) -> DispatchResult {
            let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            // Cannot overflow once the supply did not
            let balance = Balances::<T>::get(to).saturating_add(amount);

            TotalSupply::<T>::put(supply);
            Balances::<T>::insert(to, balance);
            log::debug!(target: LOG_TARGET, "Minted {amount} to {to:?}, supply {supply}");
            Ok(())
        }

        fn do_burn(from: &T::AccountId, amount: u128) -> DispatchResult {
            let balance = Balances::<T>::get(from);
            ensure!(balance >= amount, Error::<T>::InsufficientBalance);

            Balances::<T>::insert(from, balance - amount);
            TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_sub(amount));
            log::debug!(target: LOG_TARGET, "Burned {amount} from {from:?}");
            Ok(())
        }

        fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
            let from_balance = Balances::<T>::get(from);
            ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);

            if from != to {
                // Bounded by the total supply
                let to_balance = Balances::<T>::get(to).saturating_add(amount);
                Balances::<T>::insert(from, from_balance - amount);
                Balances::<T>::insert(to, to_balance);
            }
            log::debug!(target: LOG_TARGET, "Transferred {amount} from {from:?} to {to:?}");
            Ok(())
        }

        /// Check the ledger invariants: the supply equals the sum of all
        /// balances, and an authority exists exactly when initialized.
        #[cfg(any(feature = "try-runtime", test))]
        pub fn do_try_state() -> Result<(), DispatchError> {
            let sum = Balances::<T>::iter_values()
                .try_fold(0u128, |acc, balance| acc.checked_add(balance))
                .ok_or(DispatchError::Other("Sum of balances overflows u128"))?;
            let supply = TotalSupply::<T>::get();
            if sum != supply {
                log::error!(
                    target: LOG_TARGET,
                    "Total supply {supply} does not match sum of balances {sum}"
                );
                return Err(DispatchError::Other("Total supply does not match sum of balances"));
            }

            ensure!(
                Initialized::<T>::get() == Authority::<T>::get().is_some(),
                DispatchError::Other("Authority must be set exactly when initialized")
            );
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Issuing authority. `Some` initializes the ledger at genesis.
        pub authority: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Initial balances (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            if let Some(ref authority) = self.authority {
                Pallet::<T>::initialize_ledger(authority);
            }

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                total = total.checked_add(*amount).expect("Initial supply overflows u128");
                Balances::<T>::mutate(account, |balance| *balance += *amount);
            }
            TotalSupply::<T>::put(total);
        }
    }
}
