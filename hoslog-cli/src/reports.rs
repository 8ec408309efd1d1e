//! Report rendering for feasibility verdicts and generated logbooks.

use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use hoslog_core::{DayLog, TripFeasibility};

pub fn render_console_report(
    out: &mut dyn Write,
    report: &TripFeasibility,
    days: &[DayLog],
    verbose: bool,
) -> Result<()> {
    writeln!(out, "{}", "🚚 HOS Trip Check".bright_cyan().bold())?;
    writeln!(out, "{}", "=================".cyan())?;

    if report.feasible {
        writeln!(
            out,
            "{} ~{:.2}h predicted on-duty, {:.2}h cycle remaining, {} refuel stops",
            "✅ FEASIBLE".green().bold(),
            report.predicted_on_duty_hrs,
            report.remaining_cycle_hrs,
            report.refuel_stops
        )?;
    } else {
        writeln!(
            out,
            "{} {}",
            "❌ INFEASIBLE".red().bold(),
            report.message.red()
        )?;
    }

    if days.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", "📋 Duty-Status Logbook".bright_yellow().bold())?;
    writeln!(out, "{}", "======================".yellow())?;
    writeln!(
        out,
        "{:>3}  {:>8}  {:>8}  {:>8}  {:>8}",
        "Day", "Off-duty", "On-duty", "Driving", "Sleeper"
    )?;
    for (index, day) in days.iter().enumerate() {
        writeln!(
            out,
            "{:>3}  {:>8.2}  {:>8.2}  {:>8.2}  {:>8.2}",
            index + 1,
            day.off_duty_hrs,
            day.on_duty_hrs,
            day.driving_hrs,
            day.sleeper_hrs
        )?;
    }

    let total_driving: f64 = days.iter().map(|day| day.driving_hrs).sum();
    writeln!(out)?;
    writeln!(
        out,
        "Days simulated: {} | Driving logged: {:.2}h",
        days.len(),
        total_driving
    )?;

    if verbose {
        for (index, day) in days.iter().enumerate() {
            writeln!(out)?;
            writeln!(out, "{}", format!("Day {}", index + 1).bold())?;
            for entry in &day.entries {
                match entry.action.as_deref() {
                    Some(action) => writeln!(
                        out,
                        "  {:>5.2}  {:<8}  {}",
                        entry.hour,
                        entry.status.as_str(),
                        action
                    )?,
                    None => writeln!(out, "  {:>5.2}  {}", entry.hour, entry.status.as_str())?,
                }
            }
        }
    }

    Ok(())
}

pub fn render_json_report(
    out: &mut dyn Write,
    report: &TripFeasibility,
    days: &[DayLog],
) -> Result<()> {
    let value = serde_json::json!({
        "feasibility": report,
        "days": days,
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    Ok(())
}

pub fn render_markdown_report(
    out: &mut dyn Write,
    report: &TripFeasibility,
    days: &[DayLog],
) -> Result<()> {
    writeln!(out, "# HOS Trip Report\n")?;

    writeln!(out, "## Feasibility\n")?;
    let verdict = if report.feasible {
        "feasible"
    } else {
        "infeasible"
    };
    writeln!(out, "- **Verdict**: {verdict}")?;
    writeln!(
        out,
        "- **Predicted on-duty**: {:.2}h",
        report.predicted_on_duty_hrs
    )?;
    writeln!(
        out,
        "- **Cycle remaining**: {:.2}h",
        report.remaining_cycle_hrs
    )?;
    writeln!(out, "- **Refuel stops**: {}", report.refuel_stops)?;
    if !report.feasible {
        writeln!(out, "- **Reason**: {}", report.message)?;
    }

    if days.is_empty() {
        return Ok(());
    }

    writeln!(out, "\n## Day-by-day summary\n")?;
    writeln!(out, "| Day | Off-duty | On-duty | Driving | Sleeper |")?;
    writeln!(out, "|---|---|---|---|---|")?;
    for (index, day) in days.iter().enumerate() {
        writeln!(
            out,
            "| {} | {:.2} | {:.2} | {:.2} | {:.2} |",
            index + 1,
            day.off_duty_hrs,
            day.on_duty_hrs,
            day.driving_hrs,
            day.sleeper_hrs
        )?;
    }

    Ok(())
}
