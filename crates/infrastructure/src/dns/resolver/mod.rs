use super::cache::RecordCache;
use super::wire::Message;
use ember_dns_application::ports::DnsForwarder;
use ember_dns_domain::{DnsConfig, DnsError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Decides whether a request is answered from cache or forwarded upstream.
///
/// The resolver owns no I/O: the forwarder port is the single suspension
/// point, and its failures propagate to the caller untouched. Aside from
/// the shared cache the resolver is stateless, so it can serve a single
/// sequential loop or any number of concurrent request handlers.
pub struct Resolver {
    cache: Arc<RecordCache>,
    cache_enabled: bool,
}

impl Resolver {
    pub fn new(cache: Arc<RecordCache>) -> Self {
        Self {
            cache,
            cache_enabled: true,
        }
    }

    pub fn with_config(cache: Arc<RecordCache>, config: &DnsConfig) -> Self {
        Self {
            cache,
            cache_enabled: config.cache_enabled,
        }
    }

    pub fn cache(&self) -> &Arc<RecordCache> {
        &self.cache
    }

    /// Produce the response message for a decoded request.
    ///
    /// The request's first question drives resolution. A cache hit answers
    /// with the single cached record; a miss forwards upstream, caches the
    /// first returned record that carries data, and answers with everything
    /// the upstream returned. An upstream that returns no records yields an
    /// answerless response, not an error.
    pub async fn resolve(
        &self,
        request: &Message,
        forwarder: &dyn DnsForwarder,
    ) -> Result<Message, DnsError> {
        let question = request.first_question().ok_or_else(|| {
            DnsError::MalformedMessage("request carries no question".to_string())
        })?;

        if self.cache_enabled {
            if let Some(cached) = self.cache.lookup(question) {
                debug!(name = %question.name, qtype = question.qtype, "Answering from cache");
                return Ok(Message::build_response(request, vec![cached]));
            }
        }

        debug!(name = %question.name, qtype = question.qtype, "Cache miss, forwarding upstream");
        let answers = match forwarder.forward(question).await {
            Ok(answers) => answers,
            Err(err) => {
                warn!(name = %question.name, error = %err, "Upstream forward failed");
                return Err(err);
            }
        };

        if self.cache_enabled {
            // Only the first answer is retained, and only when it carries
            // data; a response with ten addresses still caches one record.
            if let Some(first) = answers.first() {
                if first.has_data() {
                    self.cache.insert(question.clone(), first.clone());
                }
            }
        }

        Ok(Message::build_response(request, answers))
    }
}
