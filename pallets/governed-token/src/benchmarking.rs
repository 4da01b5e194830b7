//! Benchmarking setup for pallet-governed-token

use super::*;

#[allow(unused)]
use crate::Pallet as GovToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

/// Make `who` the authority regardless of the genesis state.
fn set_up_authority<T: Config>(who: &T::AccountId) {
    Authority::<T>::put(who);
    Initialized::<T>::put(true);
    Paused::<T>::put(false);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn initialize() {
        Initialized::<T>::kill();
        Authority::<T>::kill();
        let authority: T::AccountId = account("authority", 0, 0);
        let origin = T::InitializeOrigin::try_successful_origin().expect("Initialize origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, authority.clone());

        assert_eq!(Authority::<T>::get(), Some(authority));
    }

    #[benchmark]
    fn mint() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        set_up_authority::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000_000);

        assert_eq!(Balances::<T>::get(&caller), 9_000_000);
    }

    #[benchmark]
    fn burn_from() {
        let caller: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, 0);
        Balances::<T>::insert(&owner, 10_000_000);
        TotalSupply::<T>::put(10_000_000);
        Allowances::<T>::insert(&owner, &caller, 5_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), owner.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&owner), 9_000_000);
        assert_eq!(Allowances::<T>::get(&owner, &caller), 4_000_000);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn transfer_from() {
        let caller: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        Balances::<T>::insert(&owner, 10_000_000);
        TotalSupply::<T>::put(10_000_000);
        Allowances::<T>::insert(&owner, &caller, 5_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), owner, recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000);
    }

    #[benchmark]
    fn pause() {
        let caller: T::AccountId = whitelisted_caller();
        set_up_authority::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(Paused::<T>::get(), true);
    }

    #[benchmark]
    fn unpause() {
        let caller: T::AccountId = whitelisted_caller();
        set_up_authority::<T>(&caller);
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(Paused::<T>::get(), false);
    }

    #[benchmark]
    fn increase_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        Allowances::<T>::insert(&caller, &spender, 1_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 500_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_500_000);
    }

    #[benchmark]
    fn decrease_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        Allowances::<T>::insert(&caller, &spender, 1_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 500_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 500_000);
    }

    impl_benchmark_test_suite!(GovToken, crate::mock::new_test_ext(), crate::mock::Test);
}
