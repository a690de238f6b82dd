use http::Extensions;
use log::{log, Level};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};
use std::time::Instant;

/// Logs each request sent through the API client, and its outcome, at a
/// fixed level
pub struct LoggingMiddleware {
    level: Level,
}

impl LoggingMiddleware {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        request: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let target = format!("{} {}", request.method(), request.url());
        log!(self.level, "sending {target}");

        let started = Instant::now();
        let result = next.run(request, extensions).await;
        let elapsed = started.elapsed();

        match &result {
            Ok(response) => log!(
                self.level,
                "{target} -> {} in {:.3}s",
                response.status(),
                elapsed.as_secs_f64()
            ),
            Err(e) => log!(
                self.level,
                "{target} failed after {:.3}s: {e}",
                elapsed.as_secs_f64()
            ),
        }

        result
    }
}
