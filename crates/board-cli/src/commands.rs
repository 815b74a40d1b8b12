use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use board_cli::logging::redact_value;
use board_cli::render::{OutputFormat, RankReport, render_leaderboard, render_rank, render_search};
use board_core::{LeaderboardView, RegistrationForm, search_view};
use board_ingest::{load_snapshot, load_state};
use board_model::{LoadState, ViewOptions};

use crate::cli::{LeaderboardArgs, RankArgs, RegisterArgs, SearchArgs};

pub fn run_leaderboard(args: &LeaderboardArgs, format: OutputFormat, styled: bool) -> Result<String> {
    let span = info_span!("leaderboard", snapshot = %args.snapshot.display());
    let _guard = span.enter();
    let state = load_state(&args.snapshot);
    let options = ViewOptions::default()
        .with_top_n(args.top)
        .with_redact_emails(!args.show_emails);
    let view = LeaderboardView::build(&state, &options);
    if let LeaderboardView::Failed { reason } = &view {
        bail!("could not load the leaderboard: {reason}");
    }
    if let LeaderboardView::Ready { rows, total } = &view {
        info!(shown = rows.len(), total, "leaderboard ready");
    }
    render_leaderboard(&view, format, styled)
}

pub fn run_search(args: &SearchArgs, format: OutputFormat, styled: bool) -> Result<String> {
    let span = info_span!("search", snapshot = %args.snapshot.display());
    let _guard = span.enter();
    let state = load_state(&args.snapshot);
    if let LoadState::Failed(reason) = &state {
        bail!("could not load the leaderboard: {reason}");
    }
    let options = ViewOptions::default().with_redact_emails(!args.show_emails);
    let outcome = search_view(&state, &args.query, &options);
    info!(query = %redact_value(&args.query), "search complete");
    render_search(&outcome, format, styled)
}

pub fn run_rank(args: &RankArgs, format: OutputFormat) -> Result<String> {
    let span = info_span!("rank", snapshot = %args.snapshot.display());
    let _guard = span.enter();
    let ambassadors = load_snapshot(&args.snapshot)
        .with_context(|| format!("load snapshot {}", args.snapshot.display()))?;
    let email = args.email.trim();
    let report = RankReport::new(&ambassadors, email, &ViewOptions::default());
    if report.row.is_none() {
        warn!(email = %redact_value(email), "ambassador not in snapshot");
    }
    render_rank(&report, format)
}

pub fn run_register(args: &RegisterArgs) -> Result<String> {
    let form = RegistrationForm {
        name: args.name.clone(),
        phone: args.phone.clone(),
        email: args.email.clone(),
        confirm_email: args.confirm_email.clone(),
        university: args.university.clone(),
    };
    let request = form.into_request().context("invalid registration")?;
    info!(email = %redact_value(&request.email), "registration validated");
    Ok(serde_json::to_string_pretty(&request)?)
}
