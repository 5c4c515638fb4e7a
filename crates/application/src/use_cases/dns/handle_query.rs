use crate::ports::QueryLogSink;
use crate::services::{AnswerSynthesizer, ZoneRouter};
use bitflip_dns_domain::{
    Config, DnsRequest, DomainError, FlipCorrelationTable, QueryLogEntry, SyntheticReply,
};
use std::sync::Arc;
use tracing::debug;

/// Classify, audit, answer
///
/// Holds the immutable per-process context shared by every listener.
pub struct HandleQueryUseCase {
    router: ZoneRouter,
    synthesizer: AnswerSynthesizer,
    query_log: Arc<dyn QueryLogSink>,
}

impl HandleQueryUseCase {
    pub fn new(config: &Config, query_log: Arc<dyn QueryLogSink>) -> Self {
        let flip_table = Arc::new(FlipCorrelationTable::from_config(config));
        Self {
            router: ZoneRouter::from_config(config),
            synthesizer: AnswerSynthesizer::new(config, flip_table),
            query_log,
        }
    }

    /// Every query is logged before it is answered. An audit failure is
    /// returned without producing replies.
    pub async fn execute(&self, request: &DnsRequest) -> Result<Vec<SyntheticReply>, DomainError> {
        let zone = self.router.classify(&request.name);
        let kind = zone.kind();

        self.query_log
            .record(&QueryLogEntry::from_request(request, kind))
            .await?;

        let replies = self.synthesizer.synthesize(
            &zone,
            &request.name,
            request.query_type,
            request.query_class,
        );

        debug!(
            domain = %request.name,
            query_type = request.query_type,
            client = %request.remote,
            zone = %kind,
            replies = replies.len(),
            "Query answered"
        );

        Ok(replies)
    }
}
