use inquire::validator::ValueRequiredValidator;
use inquire::{InquireError, Text};
use weathernow_core::WeatherSource;

use crate::render;
use crate::state::DisplayState;

/// One user-facing search session: owns the display state and runs each
/// submission through the lookup source.
pub struct SearchSession<S> {
    source: S,
    state: DisplayState,
}

impl<S: WeatherSource> SearchSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: DisplayState::default(),
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Run one submission to completion.
    ///
    /// An empty or whitespace-only city is rejected before anything is
    /// dispatched and leaves the state untouched. Otherwise the previous
    /// error is cleared, exactly one lookup runs, and its outcome replaces
    /// the snapshot. The caller is suspended until the outcome arrives, so a
    /// second submission cannot start while one is pending.
    pub async fn submit(&mut self, city: &str) -> &DisplayState {
        let city = city.trim();
        if city.is_empty() {
            return &self.state;
        }

        self.state.clear_error();
        let outcome = self.source.lookup(city).await;
        self.state.apply(outcome);

        &self.state
    }
}

/// Interactive search form: prompt for a city, look it up, render, repeat.
/// ESC or Ctrl-C leaves the loop.
pub async fn run_interactive<S: WeatherSource>(source: S) -> anyhow::Result<()> {
    let mut session = SearchSession::new(source);

    loop {
        let prompt = Text::new("City:")
            .with_validator(ValueRequiredValidator::new("Enter a city name"))
            .with_help_message("Esc to quit")
            .prompt();

        let city = match prompt {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        println!("Fetching weather for {city}...");
        session.submit(&city).await;
        render::render(session.state());
    }

    Ok(())
}
