use bitflip_dns_domain::RecordType;

/// TTL for infrastructure records and the control zone's addresses
pub const LONG_TTL: u32 = 604_800;

/// TTL for experiment addresses, short so resolvers keep coming back
pub const FLIP_TTL: u32 = 1;

/// Which reply a policy row applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyRole {
    Control,
    Correct,
    /// First reply to a flip alias, answering the name as asked
    FlippedAsked,
    /// Second reply to a flip alias, answering the rewritten correct name
    FlippedRewritten,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Correct,
    Flipped,
}

/// Where a record's value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Configured address of one side, A or AAAA following the query type
    Address(Side),
    /// `ns1.` and `ns2.` of the control zone
    Nameservers,
    Soa,
    Mx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerPolicy {
    pub role: ReplyRole,
    pub record_type: RecordType,
    pub ttl: u32,
    pub answers: &'static [ValueSource],
    /// Attach the control nameservers as authority records
    pub with_authority: bool,
}

const BOTH_SIDES: &[ValueSource] = &[
    ValueSource::Address(Side::Correct),
    ValueSource::Address(Side::Flipped),
];
const CORRECT_ONLY: &[ValueSource] = &[ValueSource::Address(Side::Correct)];
const FLIPPED_ONLY: &[ValueSource] = &[ValueSource::Address(Side::Flipped)];
const NAMESERVERS: &[ValueSource] = &[ValueSource::Nameservers];
const SOA: &[ValueSource] = &[ValueSource::Soa];
const MX: &[ValueSource] = &[ValueSource::Mx];

const fn row(
    role: ReplyRole,
    record_type: RecordType,
    ttl: u32,
    answers: &'static [ValueSource],
    with_authority: bool,
) -> AnswerPolicy {
    AnswerPolicy {
        role,
        record_type,
        ttl,
        answers,
        with_authority,
    }
}

// FlippedRewritten A keeps the flipped address; only AAAA switches sides.
static POLICIES: &[AnswerPolicy] = &[
    row(ReplyRole::Control, RecordType::A, LONG_TTL, BOTH_SIDES, true),
    row(ReplyRole::Control, RecordType::NS, LONG_TTL, NAMESERVERS, false),
    row(ReplyRole::Control, RecordType::SOA, LONG_TTL, SOA, false),
    row(ReplyRole::Control, RecordType::MX, LONG_TTL, MX, false),
    row(ReplyRole::Control, RecordType::AAAA, LONG_TTL, BOTH_SIDES, true),
    row(ReplyRole::Correct, RecordType::A, FLIP_TTL, BOTH_SIDES, false),
    row(ReplyRole::Correct, RecordType::NS, LONG_TTL, NAMESERVERS, false),
    row(ReplyRole::Correct, RecordType::SOA, LONG_TTL, SOA, false),
    row(ReplyRole::Correct, RecordType::MX, FLIP_TTL, MX, false),
    row(ReplyRole::Correct, RecordType::AAAA, FLIP_TTL, BOTH_SIDES, false),
    row(ReplyRole::FlippedAsked, RecordType::A, FLIP_TTL, FLIPPED_ONLY, false),
    row(ReplyRole::FlippedAsked, RecordType::NS, LONG_TTL, NAMESERVERS, false),
    row(ReplyRole::FlippedAsked, RecordType::SOA, LONG_TTL, SOA, false),
    row(ReplyRole::FlippedAsked, RecordType::MX, LONG_TTL, MX, false),
    row(ReplyRole::FlippedAsked, RecordType::AAAA, FLIP_TTL, FLIPPED_ONLY, false),
    row(ReplyRole::FlippedRewritten, RecordType::A, FLIP_TTL, FLIPPED_ONLY, false),
    row(ReplyRole::FlippedRewritten, RecordType::NS, LONG_TTL, NAMESERVERS, false),
    row(ReplyRole::FlippedRewritten, RecordType::SOA, LONG_TTL, SOA, false),
    row(ReplyRole::FlippedRewritten, RecordType::MX, LONG_TTL, MX, false),
    row(ReplyRole::FlippedRewritten, RecordType::AAAA, FLIP_TTL, CORRECT_ONLY, false),
];

impl AnswerPolicy {
    /// Policy row for a role and raw query type; `None` means empty answer.
    pub fn find(role: ReplyRole, query_type: u16) -> Option<&'static AnswerPolicy> {
        let record_type = RecordType::from_u16(query_type)?;
        POLICIES
            .iter()
            .find(|policy| policy.role == role && policy.record_type == record_type)
    }

    pub fn all() -> &'static [AnswerPolicy] {
        POLICIES
    }
}
