use super::answer_policy::{AnswerPolicy, ReplyRole, Side, ValueSource, LONG_TTL};
use bitflip_dns_domain::{
    AnswerSet, Config, FlipCorrelationTable, RecordData, RecordType, ReplyCode, SyntheticRecord,
    SyntheticReply, ZoneMatch, DNS_CLASS_IN,
};
use std::sync::Arc;
use tracing::warn;

const SOA_SERIAL: u32 = 1;
const SOA_REFRESH: i32 = 28_800;
const SOA_RETRY: i32 = 7_200;
const SOA_EXPIRE: i32 = 604_800;
const SOA_MINIMUM: u32 = 60;
const MX_PREFERENCE: u16 = 1;

/// Builds the reply payloads for a classified query
///
/// Pure: the same inputs always give the same replies. Control, correct and
/// unknown queries get one reply; flip aliases get two, the second answering
/// the name rewritten onto the correct zone.
pub struct AnswerSynthesizer {
    flip_table: Arc<FlipCorrelationTable>,
    correct: AnswerSet,
    flipped: AnswerSet,
    nameservers: [Arc<str>; 2],
    soa_mname: Arc<str>,
    mailbox: Arc<str>,
    mail_exchange: Arc<str>,
    disclaimer: Arc<str>,
}

impl AnswerSynthesizer {
    pub fn new(config: &Config, flip_table: Arc<FlipCorrelationTable>) -> Self {
        let control = config.control.as_str();
        let ns1: Arc<str> = Arc::from(format!("ns1.{}", control));
        let ns2: Arc<str> = Arc::from(format!("ns2.{}", control));

        Self {
            flip_table,
            correct: config.answers.correct,
            flipped: config.answers.flipped,
            soa_mname: Arc::clone(&ns1),
            nameservers: [ns1, ns2],
            mailbox: Arc::from(config.mailbox()),
            mail_exchange: Arc::from(format!("mx.{}", control)),
            disclaimer: Arc::from(format!(
                "This server is part of an InfoSec project. You can find more information on {}",
                config.control_display()
            )),
        }
    }

    pub fn synthesize(
        &self,
        zone: &ZoneMatch,
        name: &str,
        query_type: u16,
        query_class: u16,
    ) -> Vec<SyntheticReply> {
        match zone {
            ZoneMatch::Unknown => vec![self.refused(name)],
            ZoneMatch::Control => {
                vec![self.reply(ReplyRole::Control, name, name, query_type, query_class)]
            }
            ZoneMatch::Correct { .. } => {
                vec![self.reply(ReplyRole::Correct, name, name, query_type, query_class)]
            }
            ZoneMatch::Flipped { alias } => {
                let rewritten = match self.flip_table.rewrite(name, alias) {
                    Some(rewritten) => rewritten,
                    None => {
                        warn!(name = %name, alias = %alias, "Flip alias rewrite failed, echoing name");
                        name.to_string()
                    }
                };

                vec![
                    self.reply(ReplyRole::FlippedAsked, name, name, query_type, query_class),
                    self.reply(
                        ReplyRole::FlippedRewritten,
                        name,
                        &rewritten,
                        query_type,
                        query_class,
                    ),
                ]
            }
        }
    }

    fn refused(&self, name: &str) -> SyntheticReply {
        SyntheticReply {
            name: Arc::from(name),
            code: ReplyCode::Refused,
            answers: Vec::new(),
            authority: Vec::new(),
            disclaimer: self.disclaimer_record(name),
        }
    }

    /// `asked` owns the disclaimer and authority records, `answered` the
    /// question and answers; they differ only for the rewritten flip reply.
    fn reply(
        &self,
        role: ReplyRole,
        asked: &str,
        answered: &str,
        query_type: u16,
        query_class: u16,
    ) -> SyntheticReply {
        let mut answers = Vec::new();
        let mut authority = Vec::new();

        let policy = if query_class == DNS_CLASS_IN {
            AnswerPolicy::find(role, query_type)
        } else {
            None
        };

        if let Some(policy) = policy {
            for source in policy.answers {
                self.push_records(&mut answers, *source, policy, answered);
            }
            if policy.with_authority {
                self.push_nameservers(&mut authority, asked, LONG_TTL);
            }
        }

        SyntheticReply {
            name: Arc::from(answered),
            code: ReplyCode::NoError,
            answers,
            authority,
            disclaimer: self.disclaimer_record(asked),
        }
    }

    fn push_records(
        &self,
        records: &mut Vec<SyntheticRecord>,
        source: ValueSource,
        policy: &AnswerPolicy,
        owner: &str,
    ) {
        match source {
            ValueSource::Address(side) => {
                let set = match side {
                    Side::Correct => &self.correct,
                    Side::Flipped => &self.flipped,
                };
                let data = match policy.record_type {
                    RecordType::AAAA => RecordData::AAAA(set.aaaa),
                    _ => RecordData::A(set.a),
                };
                records.push(SyntheticRecord::new(owner, policy.ttl, data));
            }
            ValueSource::Nameservers => self.push_nameservers(records, owner, policy.ttl),
            ValueSource::Soa => records.push(SyntheticRecord::new(
                owner,
                policy.ttl,
                RecordData::SOA {
                    mname: Arc::clone(&self.soa_mname),
                    rname: Arc::clone(&self.mailbox),
                    serial: SOA_SERIAL,
                    refresh: SOA_REFRESH,
                    retry: SOA_RETRY,
                    expire: SOA_EXPIRE,
                    minimum: SOA_MINIMUM,
                },
            )),
            ValueSource::Mx => records.push(SyntheticRecord::new(
                owner,
                policy.ttl,
                RecordData::MX {
                    preference: MX_PREFERENCE,
                    exchange: Arc::clone(&self.mail_exchange),
                },
            )),
        }
    }

    fn push_nameservers(&self, records: &mut Vec<SyntheticRecord>, owner: &str, ttl: u32) {
        for ns in &self.nameservers {
            records.push(SyntheticRecord::new(
                owner,
                ttl,
                RecordData::NS(Arc::clone(ns)),
            ));
        }
    }

    fn disclaimer_record(&self, owner: &str) -> SyntheticRecord {
        SyntheticRecord::new(
            owner,
            LONG_TTL,
            RecordData::TXT(Arc::clone(&self.disclaimer)),
        )
    }
}
