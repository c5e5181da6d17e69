use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use helpers::*;
pub use instructions::*;
pub use state::*;

declare_id!("8Ed1A6SRTfmEbmj4czPeqaXeUqv8xfGB3Wxaw95VgVVU");

#[program]
pub mod insurance_pool {
    use super::*;

    pub fn create_pool(ctx: Context<CreatePool>, params: PoolConfigParams) -> Result<u64> {
        instructions::create_pool::handler(ctx, params)
    }

    pub fn enter_pool(ctx: Context<EnterPool>, amount: u64) -> Result<()> {
        instructions::enter_pool::handler(ctx, amount)
    }

    pub fn push_telemetry(
        ctx: Context<PushTelemetry>,
        data_id: u64,
        payload: String,
    ) -> Result<()> {
        instructions::push_telemetry::handler(ctx, data_id, payload)
    }

    pub fn create_request(ctx: Context<CreateRequest>, encoded_data: String) -> Result<u64> {
        instructions::create_request::handler(ctx, encoded_data)
    }

    pub fn approve_request(ctx: Context<ApproveRequest>, request_id: u64) -> Result<()> {
        instructions::approve_request::handler(ctx, request_id)
    }

    pub fn confirm_authority(ctx: Context<ConfirmAuthority>, request_id: u64) -> Result<()> {
        instructions::confirm_authority::handler(ctx, request_id)
    }

    pub fn claim_refund(ctx: Context<ClaimRefund>, request_id: u64) -> Result<()> {
        instructions::claim_refund::handler(ctx, request_id)
    }

    pub fn pool_details(ctx: Context<GetPoolDetails>) -> Result<PoolDetails> {
        instructions::pool_details::handler(ctx)
    }

    pub fn request_details(
        ctx: Context<GetRequestDetails>,
        request_id: u64,
    ) -> Result<RefundRequestDetails> {
        instructions::request_details::handler(ctx, request_id)
    }

    pub fn member_details(ctx: Context<GetMemberDetails>, account: Pubkey) -> Result<MemberEntry> {
        instructions::member_details::handler(ctx, account)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::ErrorCode;

    const MIN_CONTRIBUTION: u64 = 30_000;
    const REFUND_AMOUNT: u64 = 100_000;

    fn err(code: ErrorCode) -> anchor_lang::error::Error {
        code.into()
    }

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn authority() -> Pubkey {
        key(99)
    }

    fn pool_key() -> Pubkey {
        key(200)
    }

    fn params() -> PoolConfigParams {
        PoolConfigParams {
            label: "Abc".to_string(),
            min_contribution: MIN_CONTRIBUTION,
            refund_amount: REFUND_AMOUNT,
            max_participants: 5,
            min_approval_percent: 25,
            authority: authority(),
        }
    }

    fn new_pool(params: &PoolConfigParams) -> Pool {
        let mut pool = Pool {
            pool_id: 0,
            label: [0u8; LABEL_LEN],
            creator: key(100),
            authority: Pubkey::default(),
            contribution_mint: key(101),
            vault: key(102),
            min_contribution: 0,
            refund_amount: 0,
            max_participants: 0,
            min_approval_percent: 0,
            members: Vec::new(),
            next_join_seq: 0,
            request_count: 0,
            telemetry_count: 0,
            total_contributed: 0,
            total_paid_out: 0,
            created_at: 0,
            bump: 255,
            vault_auth_bump: 254,
        };
        pool.configure(params).unwrap();
        pool
    }

    fn empty_request() -> RefundRequest {
        RefundRequest {
            pool: Pubkey::default(),
            id: 0,
            creator: Pubkey::default(),
            encoded_data: String::new(),
            approvers: Vec::new(),
            authority_confirmed: false,
            paid: false,
            created_at: 0,
            settled_at: 0,
            bump: 255,
        }
    }

    fn empty_entry() -> TelemetryEntry {
        TelemetryEntry {
            pool: Pubkey::default(),
            owner: Pubkey::default(),
            seq: 0,
            data_id: 0,
            payload: String::new(),
            recorded_at: 0,
            bump: 255,
        }
    }

    fn snapshot<T: AccountSerialize>(value: &T) -> Vec<u8> {
        let mut buf = Vec::new();
        value.try_serialize(&mut buf).unwrap();
        buf
    }

    /// Drives the state machine in the same order the instruction handlers do,
    /// with the vault modeled as a plain balance. A failed call leaves every
    /// field as it was, mirroring transaction revert.
    struct Harness {
        pool: Pool,
        requests: Vec<RefundRequest>,
        telemetry: Vec<TelemetryEntry>,
        balance: u64,
        received: HashMap<Pubkey, u64>,
        registered: Vec<(Pubkey, Pubkey)>,
    }

    impl Harness {
        fn new(params: PoolConfigParams) -> Self {
            Self {
                pool: new_pool(&params),
                requests: Vec::new(),
                telemetry: Vec::new(),
                balance: 0,
                received: HashMap::new(),
                registered: Vec::new(),
            }
        }

        fn with_members(params: PoolConfigParams, count: u8) -> Self {
            let mut h = Self::new(params);
            for i in 0..count {
                h.enter(key(i + 1), MIN_CONTRIBUTION).unwrap();
            }
            h
        }

        fn atomically<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
            let pool = self.pool.clone();
            let requests = self.requests.clone();
            let telemetry = self.telemetry.clone();
            let balance = self.balance;
            let received = self.received.clone();
            let registered = self.registered.clone();
            let out = f(self);
            if out.is_err() {
                self.pool = pool;
                self.requests = requests;
                self.telemetry = telemetry;
                self.balance = balance;
                self.received = received;
                self.registered = registered;
            }
            out
        }

        fn enter(&mut self, account: Pubkey, amount: u64) -> Result<u64> {
            self.atomically(|h| {
                let joined_at = h.pool.admit(account, amount)?;
                h.balance += amount;
                h.registered.push((account, pool_key()));
                Ok(joined_at)
            })
        }

        fn push_telemetry(&mut self, account: Pubkey) -> Result<(u64, u64)> {
            self.push_payload(account, "{\"speed\":42}".to_string())
        }

        fn push_payload(&mut self, account: Pubkey, payload: String) -> Result<(u64, u64)> {
            self.atomically(|h| {
                let slot = h.pool.next_telemetry_slot(&account)?;
                let mut entry = empty_entry();
                entry.record(pool_key(), account, slot.1, 7, payload, 1_000)?;
                h.telemetry.push(entry);
                Ok(slot)
            })
        }

        fn create_request(&mut self, creator: Pubkey) -> Result<u64> {
            self.atomically(|h| {
                let id = h.pool.open_request(&creator)?;
                let mut request = empty_request();
                request.open(pool_key(), id, creator, "Abc".to_string(), 1_000)?;
                h.requests.push(request);
                Ok(id)
            })
        }

        /// A request id with no account behind it fails in the account loader
        /// before the handler runs.
        fn request_slot(&self, request_id: u64) -> Result<usize> {
            let idx = usize::try_from(request_id).map_err(|_| error!(ErrorCode::InvalidRequestId))?;
            require!(idx < self.requests.len(), ErrorCode::InvalidRequestId);
            Ok(idx)
        }

        fn settle(&mut self, idx: usize, payout: Payout) -> Result<()> {
            apply_settlement(&mut self.pool, &mut self.requests[idx], &payout, 2_000)?;
            self.balance -= payout.amount;
            *self.received.entry(payout.recipient).or_default() += payout.amount;
            Ok(())
        }

        fn approve(&mut self, approver: Pubkey, request_id: u64) -> Result<()> {
            self.atomically(|h| {
                let idx = h.request_slot(request_id)?;
                let payout = approve_and_evaluate(
                    &h.pool,
                    &pool_key(),
                    &mut h.requests[idx],
                    request_id,
                    approver,
                    h.balance,
                )?;
                if let Some(payout) = payout {
                    h.settle(idx, payout)?;
                }
                Ok(())
            })
        }

        fn confirm(&mut self, caller: Pubkey, request_id: u64) -> Result<()> {
            self.atomically(|h| {
                let idx = h.request_slot(request_id)?;
                confirm_request(&h.pool, &pool_key(), &mut h.requests[idx], request_id, &caller)
            })
        }

        fn claim(&mut self, caller: Pubkey, request_id: u64) -> Result<()> {
            self.atomically(|h| {
                let idx = h.request_slot(request_id)?;
                let payout = claim_payout(
                    &h.pool,
                    &pool_key(),
                    &h.requests[idx],
                    request_id,
                    &caller,
                    h.balance,
                )?;
                h.settle(idx, payout)
            })
        }

        fn received_by(&self, account: Pubkey) -> u64 {
            self.received.get(&account).copied().unwrap_or_default()
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(params().validate().is_ok());

        let mut p = params();
        p.label = String::new();
        assert_eq!(p.validate().unwrap_err(), err(ErrorCode::InvalidLabel));

        let mut p = params();
        p.label = "x".repeat(LABEL_LEN + 1);
        assert_eq!(p.validate().unwrap_err(), err(ErrorCode::InvalidLabel));

        let mut p = params();
        p.max_participants = 0;
        assert_eq!(
            p.validate().unwrap_err(),
            err(ErrorCode::InvalidMaxParticipants)
        );
        p.max_participants = MAX_PARTICIPANTS as u16 + 1;
        assert_eq!(
            p.validate().unwrap_err(),
            err(ErrorCode::InvalidMaxParticipants)
        );

        let mut p = params();
        p.min_approval_percent = 101;
        assert_eq!(
            p.validate().unwrap_err(),
            err(ErrorCode::InvalidApprovalPercent)
        );

        let mut p = params();
        p.refund_amount = 0;
        assert_eq!(p.validate().unwrap_err(), err(ErrorCode::InvalidAmount));

        let mut p = params();
        p.authority = Pubkey::default();
        assert_eq!(p.validate().unwrap_err(), err(ErrorCode::InvalidAuthority));
    }

    #[test]
    fn test_label_round_trip() {
        let pool = new_pool(&params());
        assert_eq!(label_to_string(&pool.label), "Abc");
        assert_eq!(pool.details(0).label, "Abc");
    }

    #[test]
    fn test_contribution_below_minimum_is_rejected() {
        let mut h = Harness::new(params());
        assert_eq!(
            h.enter(key(1), MIN_CONTRIBUTION / 2).unwrap_err(),
            err(ErrorCode::InsufficientContribution)
        );
        assert_eq!(h.pool.member_count(), 0);
        assert_eq!(h.balance, 0);
        assert!(h.registered.is_empty());

        assert_eq!(h.enter(key(1), MIN_CONTRIBUTION).unwrap(), 0);
        assert_eq!(h.pool.member_count(), 1);
        assert_eq!(h.balance, MIN_CONTRIBUTION);
    }

    #[test]
    fn test_cannot_join_twice() {
        let mut h = Harness::new(params());
        h.enter(key(1), MIN_CONTRIBUTION).unwrap();
        assert_eq!(
            h.enter(key(1), MIN_CONTRIBUTION).unwrap_err(),
            err(ErrorCode::AlreadyMember)
        );
        assert_eq!(
            h.enter(key(1), MIN_CONTRIBUTION * 10).unwrap_err(),
            err(ErrorCode::AlreadyMember)
        );
        assert_eq!(h.pool.member_count(), 1);
        assert_eq!(h.registered, vec![(key(1), pool_key())]);

        assert_eq!(h.enter(key(2), MIN_CONTRIBUTION).unwrap(), 1);
    }

    #[test]
    fn test_pool_has_a_member_limit() {
        let mut h = Harness::with_members(params(), 5);
        assert_eq!(h.pool.member_count(), 5);
        assert_eq!(
            h.enter(key(6), MIN_CONTRIBUTION).unwrap_err(),
            err(ErrorCode::PoolFull)
        );
        assert_eq!(h.pool.member_count(), 5);
        assert_eq!(h.balance, MIN_CONTRIBUTION * 5);
    }

    #[test]
    fn test_authority_cannot_join() {
        let mut h = Harness::new(params());
        assert_eq!(
            h.enter(authority(), MIN_CONTRIBUTION).unwrap_err(),
            err(ErrorCode::AuthorityCannotJoin)
        );
    }

    #[test]
    fn test_member_records() {
        let mut h = Harness::new(params());
        h.enter(key(1), MIN_CONTRIBUTION).unwrap();
        h.enter(key(2), MIN_CONTRIBUTION * 3).unwrap();

        let second = h.pool.require_member(&key(2)).unwrap();
        assert_eq!(second.contributed_amount, MIN_CONTRIBUTION * 3);
        assert_eq!(second.joined_at, 1);
        assert_eq!(h.pool.total_contributed, MIN_CONTRIBUTION * 4);
        assert_eq!(
            h.pool.require_member(&key(3)).unwrap_err(),
            err(ErrorCode::NotAMember)
        );
    }

    #[test]
    fn test_telemetry_requires_membership() {
        let mut h = Harness::new(params());
        let before = snapshot(&h.pool);
        assert_eq!(
            h.push_telemetry(key(1)).unwrap_err(),
            err(ErrorCode::NotAMember)
        );
        assert_eq!(snapshot(&h.pool), before);

        h.enter(key(1), MIN_CONTRIBUTION).unwrap();
        h.enter(key(2), MIN_CONTRIBUTION).unwrap();
        assert_eq!(h.push_telemetry(key(1)).unwrap(), (0, 0));
        assert_eq!(h.push_telemetry(key(2)).unwrap(), (1, 0));
        assert_eq!(h.push_telemetry(key(1)).unwrap(), (2, 1));
        assert_eq!(h.pool.require_member(&key(1)).unwrap().telemetry_count, 2);
        assert_eq!(h.pool.telemetry_count, 3);

        let third = &h.telemetry[2];
        assert_eq!(third.owner, key(1));
        assert_eq!(third.pool, pool_key());
        assert_eq!(third.seq, 1);
        assert_eq!(third.data_id, 7);
    }

    #[test]
    fn test_telemetry_payload_is_bounded() {
        let mut h = Harness::with_members(params(), 1);
        let before = snapshot(&h.pool);
        let payload = "x".repeat(MAX_TELEMETRY_PAYLOAD_LEN + 1);
        assert_eq!(
            h.push_payload(key(1), payload).unwrap_err(),
            err(ErrorCode::TelemetryPayloadTooLong)
        );
        assert_eq!(snapshot(&h.pool), before);
        assert!(h.telemetry.is_empty());

        let payload = "x".repeat(MAX_TELEMETRY_PAYLOAD_LEN);
        assert_eq!(h.push_payload(key(1), payload).unwrap(), (0, 0));
        assert_eq!(h.telemetry[0].payload.len(), MAX_TELEMETRY_PAYLOAD_LEN);
    }

    #[test]
    fn test_create_request_requires_membership() {
        let mut h = Harness::new(params());
        assert_eq!(
            h.create_request(key(1)).unwrap_err(),
            err(ErrorCode::NotAMember)
        );
        assert_eq!(h.pool.request_count, 0);

        h.enter(key(1), MIN_CONTRIBUTION).unwrap();
        assert_eq!(h.create_request(key(1)).unwrap(), 0);
        assert_eq!(h.create_request(key(1)).unwrap(), 1);

        let details = h.requests[0].details();
        assert_eq!(details.encoded_data, "Abc");
        assert_eq!(details.creator, key(1));
        assert_eq!(details.approver_count, 0);
        assert!(!details.authority_confirmed);
        assert!(!details.paid);
    }

    #[test]
    fn test_encoded_data_length_is_bounded() {
        let mut request = empty_request();
        let data = "x".repeat(MAX_ENCODED_DATA_LEN + 1);
        let result = request.open(pool_key(), 0, key(1), data, 0);
        assert_eq!(result.unwrap_err(), err(ErrorCode::EncodedDataTooLong));
    }

    #[test]
    fn test_approve_requires_membership() {
        let mut h = Harness::with_members(params(), 1);
        h.create_request(key(1)).unwrap();

        let before = snapshot(&h.requests[0]);
        assert_eq!(
            h.approve(key(2), 0).unwrap_err(),
            err(ErrorCode::NotAMember)
        );
        assert_eq!(snapshot(&h.requests[0]), before);
    }

    #[test]
    fn test_approve_unknown_request() {
        let mut h = Harness::with_members(params(), 2);
        h.create_request(key(1)).unwrap();
        assert_eq!(
            h.approve(key(2), 1).unwrap_err(),
            err(ErrorCode::InvalidRequestId)
        );
        assert_eq!(
            h.confirm(authority(), 7).unwrap_err(),
            err(ErrorCode::InvalidRequestId)
        );
        assert_eq!(
            h.claim(key(1), 3).unwrap_err(),
            err(ErrorCode::InvalidRequestId)
        );
    }

    #[test]
    fn test_request_from_another_pool_is_rejected() {
        let mut pool = new_pool(&params());
        pool.request_count = 1;
        let mut foreign = empty_request();
        foreign.open(key(201), 0, key(1), String::new(), 0).unwrap();

        assert_eq!(
            pool.check_request(&pool_key(), &foreign, 0).unwrap_err(),
            err(ErrorCode::InvalidRequestId)
        );
    }

    #[test]
    fn test_request_id_mismatch_is_rejected_on_every_path() {
        let mut h = Harness::with_members(params(), 2);
        h.create_request(key(1)).unwrap();
        h.requests[0].id = 5;

        assert_eq!(
            h.approve(key(2), 0).unwrap_err(),
            err(ErrorCode::InvalidRequestId)
        );
        assert_eq!(
            h.confirm(authority(), 0).unwrap_err(),
            err(ErrorCode::InvalidRequestId)
        );
        assert_eq!(
            h.claim(key(1), 0).unwrap_err(),
            err(ErrorCode::InvalidRequestId)
        );
        assert_eq!(h.requests[0].approver_count(), 0);
    }

    fn request_address(pool: &Pubkey, request_id: u64) -> Pubkey {
        Pubkey::find_program_address(
            &[REFUND_REQUEST_SEED, pool.as_ref(), &request_id.to_le_bytes()],
            &ID,
        )
        .0
    }

    #[test]
    fn test_request_address_depends_on_pool_and_id() {
        let first = request_address(&pool_key(), 0);
        assert_eq!(first, request_address(&pool_key(), 0));
        assert_ne!(first, request_address(&pool_key(), 1));
        assert_ne!(first, request_address(&key(201), 0));
    }

    #[test]
    fn test_claim_checks_caller_before_paid_flag() {
        let mut h = Harness::with_members(params(), 4);
        h.create_request(key(1)).unwrap();
        h.confirm(authority(), 0).unwrap();
        h.approve(key(2), 0).unwrap();
        assert!(h.requests[0].paid);

        assert_eq!(
            h.claim(key(2), 0).unwrap_err(),
            err(ErrorCode::Unauthorized)
        );
        assert_eq!(
            h.claim(key(1), 0).unwrap_err(),
            err(ErrorCode::AlreadySettled)
        );
    }

    #[test]
    fn test_member_cannot_approve_twice() {
        let mut h = Harness::with_members(params(), 2);
        h.create_request(key(1)).unwrap();

        h.approve(key(2), 0).unwrap();
        assert_eq!(
            h.approve(key(2), 0).unwrap_err(),
            err(ErrorCode::AlreadyApproved)
        );
        assert_eq!(h.requests[0].approver_count(), 1);
    }

    #[test]
    fn test_only_authority_confirms() {
        let mut h = Harness::with_members(params(), 1);
        h.create_request(key(1)).unwrap();

        assert_eq!(
            h.confirm(key(1), 0).unwrap_err(),
            err(ErrorCode::Unauthorized)
        );
        assert!(!h.requests[0].authority_confirmed);

        h.confirm(authority(), 0).unwrap();
        assert!(h.requests[0].authority_confirmed);
        assert_eq!(
            h.confirm(authority(), 0).unwrap_err(),
            err(ErrorCode::AlreadyConfirmed)
        );
    }

    #[test]
    fn test_no_payout_below_quorum() {
        let mut h = Harness::with_members(params(), 5);
        h.create_request(key(1)).unwrap();
        h.confirm(authority(), 0).unwrap();

        // 1 of 5 is 20%, below the 25% threshold.
        h.approve(key(2), 0).unwrap();
        assert!(!h.requests[0].paid);
        assert_eq!(h.received_by(key(1)), 0);

        let before = (snapshot(&h.pool), snapshot(&h.requests[0]), h.balance);
        assert_eq!(h.claim(key(1), 0).unwrap_err(), err(ErrorCode::NotEligible));
        assert_eq!(
            (snapshot(&h.pool), snapshot(&h.requests[0]), h.balance),
            before
        );
    }

    #[test]
    fn test_no_payout_without_authority() {
        let mut h = Harness::with_members(params(), 5);
        h.create_request(key(1)).unwrap();

        h.approve(key(2), 0).unwrap();
        h.approve(key(3), 0).unwrap();
        assert!(!h.requests[0].paid);
        assert_eq!(h.balance, MIN_CONTRIBUTION * 5);
        assert_eq!(h.claim(key(1), 0).unwrap_err(), err(ErrorCode::NotEligible));
    }

    #[test]
    fn test_confirming_authority_alone_does_not_settle() {
        let mut h = Harness::with_members(params(), 5);
        h.create_request(key(1)).unwrap();
        h.approve(key(2), 0).unwrap();
        h.approve(key(3), 0).unwrap();

        h.confirm(authority(), 0).unwrap();
        assert!(!h.requests[0].paid);

        h.claim(key(1), 0).unwrap();
        assert!(h.requests[0].paid);
        assert_eq!(h.received_by(key(1)), REFUND_AMOUNT);
    }

    #[test]
    fn test_refund_paid_on_quorum_approval() {
        let mut h = Harness::with_members(params(), 5);
        assert_eq!(h.balance, 150_000);
        h.create_request(key(1)).unwrap();
        h.confirm(authority(), 0).unwrap();

        h.approve(key(2), 0).unwrap();
        assert!(!h.requests[0].paid);

        // 2 of 5 is 40%.
        h.approve(key(3), 0).unwrap();
        assert!(h.requests[0].paid);
        assert_eq!(h.received_by(key(1)), REFUND_AMOUNT);
        assert_eq!(h.balance, 50_000);
        assert_eq!(h.pool.total_paid_out, REFUND_AMOUNT);

        assert_eq!(
            h.approve(key(4), 0).unwrap_err(),
            err(ErrorCode::AlreadySettled)
        );
        assert_eq!(h.claim(key(1), 0).unwrap_err(), err(ErrorCode::AlreadySettled));
        assert_eq!(h.received_by(key(1)), REFUND_AMOUNT);
        assert_eq!(h.balance, 50_000);
    }

    #[test]
    fn test_claim_after_balance_recovers() {
        let mut h = Harness::with_members(params(), 3);
        assert_eq!(h.balance, 90_000);
        h.create_request(key(1)).unwrap();
        h.confirm(authority(), 0).unwrap();

        h.approve(key(2), 0).unwrap();
        h.approve(key(3), 0).unwrap();
        assert!(!h.requests[0].paid);
        assert_eq!(h.received_by(key(1)), 0);
        assert_eq!(h.claim(key(1), 0).unwrap_err(), err(ErrorCode::NotEligible));

        // Joining never settles on its own.
        h.enter(key(4), MIN_CONTRIBUTION).unwrap();
        assert_eq!(h.balance, 120_000);
        assert!(!h.requests[0].paid);
        assert_eq!(h.received_by(key(1)), 0);

        assert_eq!(h.claim(key(2), 0).unwrap_err(), err(ErrorCode::Unauthorized));
        h.claim(key(1), 0).unwrap();
        assert!(h.requests[0].paid);
        assert_eq!(h.received_by(key(1)), REFUND_AMOUNT);
        assert_eq!(h.balance, 20_000);

        assert_eq!(h.claim(key(1), 0).unwrap_err(), err(ErrorCode::AlreadySettled));
        assert_eq!(h.received_by(key(1)), REFUND_AMOUNT);
    }

    #[test]
    fn test_later_members_dilute_quorum() {
        let mut p = params();
        p.min_approval_percent = 50;
        let mut h = Harness::with_members(p, 2);
        h.create_request(key(1)).unwrap();
        h.confirm(authority(), 0).unwrap();

        h.enter(key(3), MIN_CONTRIBUTION).unwrap();
        h.enter(key(4), MIN_CONTRIBUTION).unwrap();
        h.enter(key(5), MIN_CONTRIBUTION).unwrap();

        // 2 of 5 is 40%; with the original two members it would be 100%.
        h.approve(key(1), 0).unwrap();
        h.approve(key(2), 0).unwrap();
        assert!(!h.requests[0].paid);

        h.approve(key(3), 0).unwrap();
        assert!(h.requests[0].paid);
    }

    #[test]
    fn test_payout_happens_at_most_once() {
        let mut h = Harness::with_members(params(), 5);
        h.create_request(key(1)).unwrap();
        h.confirm(authority(), 0).unwrap();
        h.approve(key(2), 0).unwrap();
        h.approve(key(3), 0).unwrap();
        assert!(h.requests[0].paid);

        assert!(evaluate_settlement(&h.pool, &h.requests[0], u64::MAX).is_none());
        let payout = Payout {
            recipient: key(1),
            amount: REFUND_AMOUNT,
        };
        assert_eq!(
            apply_settlement(&mut h.pool, &mut h.requests[0], &payout, 0).unwrap_err(),
            err(ErrorCode::AlreadySettled)
        );
        assert_eq!(h.pool.total_paid_out, REFUND_AMOUNT);
    }

    #[test]
    fn test_two_requests_settle_independently() {
        let mut h = Harness::with_members(params(), 5);
        h.enter(key(6), MIN_CONTRIBUTION).unwrap_err();
        h.create_request(key(1)).unwrap();
        h.create_request(key(2)).unwrap();
        h.confirm(authority(), 0).unwrap();
        h.confirm(authority(), 1).unwrap();

        h.approve(key(3), 0).unwrap();
        h.approve(key(4), 0).unwrap();
        assert!(h.requests[0].paid);
        assert_eq!(h.balance, 50_000);

        h.approve(key(3), 1).unwrap();
        h.approve(key(4), 1).unwrap();
        assert!(!h.requests[1].paid);
        assert_eq!(h.claim(key(2), 1).unwrap_err(), err(ErrorCode::NotEligible));
        assert_eq!(h.received_by(key(2)), 0);
    }

    #[test]
    fn test_approval_percent_uses_integer_division() {
        let mut h = Harness::with_members(params(), 3);
        assert_eq!(h.pool.approval_percent(1), 33);
        assert_eq!(h.pool.approval_percent(2), 66);
        assert_eq!(h.pool.approval_percent(3), 100);

        h.pool.members.clear();
        assert_eq!(h.pool.approval_percent(1), 0);
        assert!(!h.pool.quorum_reached(0));
    }

    #[test]
    fn test_payout_goes_to_creator() {
        let mut h = Harness::with_members(params(), 5);
        h.create_request(key(3)).unwrap();
        h.confirm(authority(), 0).unwrap();
        h.approve(key(1), 0).unwrap();
        assert!(evaluate_settlement(&h.pool, &h.requests[0], h.balance).is_none());

        h.requests[0].approvers.push(key(2));
        let payout = evaluate_settlement(&h.pool, &h.requests[0], h.balance).unwrap();
        assert_eq!(
            payout,
            Payout {
                recipient: key(3),
                amount: REFUND_AMOUNT,
            }
        );
    }

    #[test]
    fn test_pool_details() {
        let mut h = Harness::with_members(params(), 2);
        h.create_request(key(1)).unwrap();
        h.push_telemetry(key(2)).unwrap();

        let details = h.pool.details(h.balance);
        assert_eq!(details.member_count, 2);
        assert_eq!(details.max_participants, 5);
        assert_eq!(details.min_approval_percent, 25);
        assert_eq!(details.refund_amount, REFUND_AMOUNT);
        assert_eq!(details.request_count, 1);
        assert_eq!(details.telemetry_count, 1);
        assert_eq!(details.balance, MIN_CONTRIBUTION * 2);
        assert_eq!(details.authority, authority());
    }
}
