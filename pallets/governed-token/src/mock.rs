use crate as pallet_governed_token;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
};
use frame_system::EnsureRoot;
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        GovToken: pallet_governed_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_governed_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type InitializeOrigin = EnsureRoot<u64>;
    type WeightInfo = ();
}

/// The issuing authority set at genesis.
pub const OWNER: u64 = 1;
pub const ADDR1: u64 = 2;
pub const ADDR2: u64 = 3;

fn build(authority: Option<u64>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_governed_token::GenesisConfig::<Test> {
        authority,
        token_name: b"HODLpac Governance".to_vec(),
        token_symbol: b"HPG".to_vec(),
        decimals: 18,
        initial_balances: vec![],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are not recorded at block zero.
    ext.execute_with(|| System::set_block_number(1));
    ext
}

// Initialized ledger with OWNER as authority and zero supply.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build(Some(OWNER))
}

// Freshly deployed storage, waiting for `initialize`.
pub fn new_uninitialized_ext() -> sp_io::TestExternalities {
    build(None)
}
