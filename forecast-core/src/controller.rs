//! Owns the current query and the page, and turns triggers into fetch cycles.
//!
//! A trigger mutates the query synchronously and hands back a [`Cycle`]
//! carrying a request token. Cycles may be run concurrently; when an outcome
//! comes back, [`Controller::complete`] only applies it if its token is the
//! latest one issued, so an older request finishing late never overwrites a
//! newer render.

use chrono::NaiveDate;

use crate::{
    error::ForecastError,
    format::split_address,
    model::{ForecastQuery, ForecastResponse},
    provider::ForecastProvider,
    render::{Page, render},
};

/// A fetch that has been issued but not yet applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    pub token: u64,
    pub query: ForecastQuery,
}

impl Cycle {
    /// Fetch the forecast for this cycle's query.
    pub async fn run(self, provider: &dyn ForecastProvider) -> CycleOutcome {
        let result = provider.fetch_forecast(&self.query.location, self.query.units).await;
        CycleOutcome {
            cycle: self,
            result,
        }
    }
}

#[derive(Debug)]
pub struct CycleOutcome {
    pub cycle: Cycle,
    pub result: Result<ForecastResponse, ForecastError>,
}

/// What [`Controller::complete`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Rendered,
    Failed,
    /// A newer cycle was issued after this one; the outcome was dropped.
    Stale,
}

#[derive(Debug)]
pub struct Controller {
    query: ForecastQuery,
    page: Page,
    latest_token: u64,
}

impl Controller {
    pub fn new(query: ForecastQuery) -> Self {
        let page = Page::new(query.units);
        Self {
            query,
            page,
            latest_token: 0,
        }
    }

    pub fn query(&self) -> &ForecastQuery {
        &self.query
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn startup(&mut self) -> Cycle {
        self.issue()
    }

    /// Search trigger. Blank input keeps the current location.
    pub fn search(&mut self, input: &str) -> Cycle {
        let location = input.trim();
        if location.is_empty() {
            tracing::debug!("blank search input, keeping current location");
        } else {
            self.query.location = location.to_string();
        }
        self.issue()
    }

    /// Unit-toggle trigger.
    pub fn toggle_units(&mut self) -> Cycle {
        self.query.units = self.query.units.toggled();
        self.page.set_toggle_label(self.query.units);
        self.issue()
    }

    fn issue(&mut self) -> Cycle {
        self.latest_token += 1;
        let cycle = Cycle {
            token: self.latest_token,
            query: self.query.clone(),
        };
        tracing::info!(
            token = cycle.token,
            location = %cycle.query.location,
            units = %cycle.query.units,
            "forecast cycle issued"
        );
        cycle
    }

    /// Apply a finished cycle to the page.
    pub fn complete(&mut self, outcome: CycleOutcome, today: NaiveDate) -> Applied {
        let CycleOutcome { cycle, result } = outcome;

        if cycle.token != self.latest_token {
            tracing::warn!(
                token = cycle.token,
                latest = self.latest_token,
                "discarding stale forecast"
            );
            return Applied::Stale;
        }

        match result {
            Ok(response) => {
                let (city, country) = split_address(&response.resolved_address);
                render(&mut self.page, &city, &country, &response.days, cycle.query.units, today);
                Applied::Rendered
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    location = %cycle.query.location,
                    "forecast cycle failed"
                );
                self.page.show_error(err.to_string());
                Applied::Failed
            }
        }
    }

    /// Fetch and apply a cycle in one go.
    pub async fn run(
        &mut self,
        provider: &dyn ForecastProvider,
        cycle: Cycle,
        today: NaiveDate,
    ) -> Applied {
        let outcome = cycle.run(provider).await;
        self.complete(outcome, today)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ForecastQuery::default())
    }
}
