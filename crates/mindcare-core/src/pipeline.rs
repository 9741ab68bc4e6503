//! Response selection pipeline.
//!
//! Stages run in a fixed order and the first one that produces text wins:
//!
//! 1. crisis check (fixed safety message, nothing else runs)
//! 2. remote generation, when a generator is configured
//! 3. greeting
//! 4. follow-up on the most recent topic
//! 5. topic-specific family
//! 6. general family, optionally enriched with a health resource
//!
//! Remote failures are logged and skipped; `respond` always yields text for
//! non-empty input.

use crate::classifier::{
    CRISIS_RESPONSE, detect_mental_health_topics, follow_up_family, is_crisis_message,
    is_follow_up, is_greeting, topic_family,
};
use crate::generation::{HISTORY_WINDOW, TextGenerator};
use crate::health::{DEFAULT_HEALTH_KEYWORD, HealthInfoProvider};
use crate::responses::{RETURNING_GREETING, ResponseFamily};
use crate::session::ChatSession;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{debug, warn};

/// Produces one reply per user message, updating the session it is given.
pub struct ResponsePipeline<R = StdRng> {
    generator: Option<Arc<dyn TextGenerator>>,
    health: Option<Arc<dyn HealthInfoProvider>>,
    rng: R,
}

impl ResponsePipeline<StdRng> {
    /// Pipeline with an entropy-seeded random source and no remote services.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Pipeline whose random choices are reproducible for `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ResponsePipeline<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ResponsePipeline<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            generator: None,
            health: None,
            rng,
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_health_provider(mut self, health: Arc<dyn HealthInfoProvider>) -> Self {
        self.health = Some(health);
        self
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Handles one user message.
    ///
    /// Returns `None` for empty or whitespace-only input, leaving the session
    /// untouched. Otherwise the context and history are updated and the reply
    /// is returned.
    pub async fn respond(&mut self, session: &mut ChatSession, input: &str) -> Option<String> {
        let message = input.trim();
        if message.is_empty() {
            return None;
        }

        session.context.observe(message);
        let reply = self.select_reply(session, message).await;

        session.push_user(message);
        session.push_assistant(reply.clone());
        Some(reply)
    }

    async fn select_reply(&mut self, session: &ChatSession, message: &str) -> String {
        if is_crisis_message(message) {
            warn!(session_id = %session.id, "crisis keyword detected, returning safety resources");
            return CRISIS_RESPONSE.to_string();
        }

        if let Some(generator) = &self.generator {
            let history = session.recent_history(HISTORY_WINDOW);
            match generator.generate(message, history).await {
                Ok(text) if !text.trim().is_empty() => return text,
                Ok(_) => warn!("remote generation returned empty text, using local responses"),
                Err(err) => warn!(error = %err, "remote generation failed, using local responses"),
            }
        }

        let context = &session.context;

        if is_greeting(message, context.message_count) {
            debug!(message_count = context.message_count, "greeting");
            return if context.message_count == 1 {
                ResponseFamily::Greeting.pick(&mut self.rng).to_string()
            } else {
                RETURNING_GREETING.to_string()
            };
        }

        if is_follow_up(message, context.has_topics()) {
            let family = follow_up_family(context.last_topic());
            debug!(?family, "follow-up");
            return family.pick(&mut self.rng).to_string();
        }

        let family = topic_family(message);
        debug!(?family, "topic response");
        let reply = family.pick(&mut self.rng).to_string();

        if family == ResponseFamily::General {
            return self.enrich_general(reply, message).await;
        }
        reply
    }

    async fn enrich_general(&self, reply: String, message: &str) -> String {
        let Some(health) = &self.health else {
            return reply;
        };

        let topics = detect_mental_health_topics(message);
        let keyword = topics.last().copied().unwrap_or(DEFAULT_HEALTH_KEYWORD);

        match health.lookup(keyword).await {
            Ok(Some(resource)) => format!(
                "{reply}\n\n📚 **Related resource:** {}\n{}",
                resource.title, resource.url
            ),
            Ok(None) => reply,
            Err(err) => {
                warn!(error = %err, keyword, "health lookup failed");
                reply
            }
        }
    }
}
