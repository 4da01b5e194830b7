//! Storage migrations for pallet-governed-token.
//!
//! Each migration is versioned against `STORAGE_VERSION` and checks the
//! on-chain version before touching storage, so running it twice is a no-op.
//!
//! # Introducing the pallet on a live chain
//!
//! A chain that adds this pallet through a runtime upgrade never runs the
//! genesis config, so the ledger starts uninitialized. Wire
//! [`v1::MigrateToV1`] into the runtime's `Executive` to run the one-shot
//! initialization as part of the upgrade:
//!
//! ```ignore
//! parameter_types! {
//!     pub TokenAuthority: AccountId = TREASURY_ACCOUNT;
//! }
//!
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_governed_token::migrations::v1::MigrateToV1<Runtime, TokenAuthority>,
//! >;
//! ```
//!
//! Chains that already initialized the ledger (through genesis or the
//! `initialize` call) only get their storage version bumped.

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Initialized, Pallet, LOG_TARGET};

/// Migration to version 1 (initial release).
pub mod v1 {
    use super::*;

    /// Brings storage to version 1, initializing the ledger with `A::get()`
    /// as authority when nothing initialized it before.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The runtime configuration type implementing `Config`
    /// * `A` - The authority to install if the ledger is uninitialized
    pub struct MigrateToV1<T, A>(PhantomData<(T, A)>);

    impl<T: Config, A: Get<T::AccountId>> OnRuntimeUpgrade for MigrateToV1<T, A> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version >= 1 {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );
                return T::DbWeight::get().reads(1);
            }

            if Initialized::<T>::get() {
                log::info!(
                    target: LOG_TARGET,
                    "Running migration v0 → v1 (ledger already initialized)"
                );
                StorageVersion::new(1).put::<Pallet<T>>();
                // version + initialized flag read, version written
                return T::DbWeight::get().reads_writes(2, 1);
            }

            log::info!(target: LOG_TARGET, "Running migration v0 → v1 (initializing ledger)");
            Pallet::<T>::initialize_ledger(&A::get());
            StorageVersion::new(1).put::<Pallet<T>>();

            // version + initialized flag read; authority, paused, initialized, version written
            T::DbWeight::get().reads_writes(2, 4)
        }

        /// Records whether the ledger was initialized before the upgrade.
        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            let initialized = Initialized::<T>::get();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: storage version {on_chain_version:?}, initialized {initialized}"
            );

            Ok((initialized, crate::Authority::<T>::get()).encode())
        }

        /// Verifies the ledger is initialized, a previous authority was kept and
        /// the ledger invariants still hold.
        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let (was_initialized, previous_authority): (bool, Option<T::AccountId>) =
                Decode::decode(&mut &state[..])
                    .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            frame_support::ensure!(
                Pallet::<T>::on_chain_storage_version() >= 1,
                sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
            );
            frame_support::ensure!(
                Initialized::<T>::get(),
                sp_runtime::TryRuntimeError::Other("Ledger not initialized after v1 migration")
            );
            if was_initialized {
                frame_support::ensure!(
                    crate::Authority::<T>::get() == previous_authority,
                    sp_runtime::TryRuntimeError::Other("v1 migration replaced the authority")
                );
            }

            Pallet::<T>::do_try_state()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{new_test_ext, new_uninitialized_ext, Test, ADDR1, OWNER};
    use frame_support::{assert_noop, assert_ok, parameter_types, traits::StorageVersion};

    parameter_types! {
        pub const UpgradeAuthority: u64 = ADDR1;
    }

    type Migration = v1::MigrateToV1<Test, UpgradeAuthority>;

    /// An uninitialized ledger at v0 gets initialized by the upgrade.
    #[test]
    fn migration_v1_initializes_fresh_ledger() {
        new_uninitialized_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            assert!(!Initialized::<Test>::get());

            let _weight = Migration::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            assert!(Initialized::<Test>::get());
            assert_eq!(Pallet::<Test>::authority(), Some(ADDR1));
            assert!(!Pallet::<Test>::is_paused());
            assert_ok!(Pallet::<Test>::do_try_state());
        });
    }

    /// After the upgrade initialized the ledger, `initialize` stays closed.
    #[test]
    fn migration_v1_closes_initialize() {
        new_uninitialized_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            Migration::on_runtime_upgrade();

            assert_noop!(
                Pallet::<Test>::initialize(frame_system::RawOrigin::Root.into(), OWNER),
                crate::Error::<Test>::AlreadyInitialized
            );
        });
    }

    /// A ledger initialized before the upgrade keeps its authority.
    #[test]
    fn migration_v1_keeps_existing_authority() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();

            Migration::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            assert_eq!(Pallet::<Test>::authority(), Some(OWNER));
        });
    }

    /// Running the migration again never re-initializes.
    #[test]
    fn migration_v1_idempotent() {
        new_uninitialized_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            Migration::on_runtime_upgrade();
            assert_ok!(Pallet::<Test>::pause(frame_system::RawOrigin::Signed(ADDR1).into()));

            Migration::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            assert_eq!(Pallet::<Test>::authority(), Some(ADDR1));
            assert!(Pallet::<Test>::is_paused());
        });
    }

    /// Test that migration doesn't run on higher versions.
    #[test]
    fn migration_v1_skipped_on_higher_version() {
        new_uninitialized_ext().execute_with(|| {
            StorageVersion::new(5).put::<Pallet<Test>>();

            Migration::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 5);
            assert!(!Initialized::<Test>::get());
        });
    }
}
