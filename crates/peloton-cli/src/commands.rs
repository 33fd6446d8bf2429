//! Subcommand implementations.

use anyhow::{Context, Result};
use peloton::{plan_season, PelotonConfig, ScoredCompetitor, SeasonPlan};
use tracing::info;

use crate::cli::{OptimizeArgs, RankArgs, RankBy};
use crate::input;
use crate::output::{self, CompetitorView, OptimizeView};

pub fn rank(args: &RankArgs) -> Result<()> {
    let (riders, catalog) = input::load(&args.input)?;
    let table = peloton::score(&riders, &catalog).context("scoring riders")?;

    let (title, ranked): (&str, Vec<&ScoredCompetitor>) = match args.by {
        RankBy::Points => ("Top riders by projected points", table.top_by_points(args.limit)),
        RankBy::Value => ("Top riders by points per million", table.top_by_value(args.limit)),
    };

    if args.json {
        let views: Vec<CompetitorView> = ranked.into_iter().map(CompetitorView::from).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        output::print_competitors(title, &ranked);
    }
    Ok(())
}

/// The config file, if any, with command-line overrides applied.
pub fn build_config(args: &OptimizeArgs) -> Result<PelotonConfig> {
    let mut config = match &args.config {
        Some(path) => {
            PelotonConfig::load(path).with_context(|| format!("loading config from {}", path.display()))?
        }
        None => PelotonConfig::default(),
    };

    if let Some(budget) = args.budget {
        config = config.with_budget(budget);
    }
    if let Some(team_size) = args.team_size {
        config = config.with_team_size(team_size);
    }
    for &id in &args.include {
        config = config.with_include(id);
    }
    for &id in &args.exclude {
        config = config.with_exclude(id);
    }
    if let Some(secs) = args.time_limit_secs {
        config = config.with_time_limit_seconds(secs);
    }
    if let Some(strategy) = args.strategy {
        config = config.with_strategy(strategy.into());
    }

    config.validate()?;
    Ok(config)
}

fn season(args: &OptimizeArgs) -> Result<SeasonPlan> {
    let config = build_config(args)?;
    let (riders, catalog) = input::load(&args.input)?;

    info!(
        event = "optimize",
        riders = riders.len(),
        events = catalog.len(),
        budget = config.selection.budget,
        team_size = config.selection.team_size,
    );

    plan_season(&riders, &catalog, &config, None).context("planning season")
}

/// The JSON view of an optimize run.
pub fn plan(args: &OptimizeArgs) -> Result<OptimizeView> {
    let season = season(args)?;
    Ok(OptimizeView::new(&season.roster, &season.captaincy, &season.summary))
}

pub fn optimize(args: &OptimizeArgs) -> Result<()> {
    let season = season(args)?;

    if args.json {
        let view = OptimizeView::new(&season.roster, &season.captaincy, &season.summary);
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        output::print_roster(&season.roster);
        output::print_captaincy(&season.captaincy);
        output::print_summary(&season.summary);
    }
    Ok(())
}
