//! Default interactive command - fill the form at the prompt and predict

use crate::cli::progress::CliListener;
use crate::cli::style::{Stylize, cross};
use anstream::{eprintln, println};
use anyhow::{Context, Result};
use capacity_predict::form::{FormModel, is_number_shaped};
use capacity_predict::service::{HttpPredictionService, ServiceConfig};
use capacity_predict::submit::SubmissionController;
use capacity_predict::types::{BIOMASS_CATALOG, Feature};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::sync::Arc;

/// Run the interactive session (default when no subcommand given)
///
/// The form survives between rounds, so a second prediction only needs
/// the changed values to be retyped.
pub async fn run_interactive(config: ServiceConfig) -> Result<()> {
    let theme = ColorfulTheme::default();
    let service = HttpPredictionService::new(config)?;
    let controller = SubmissionController::new(Arc::new(service));
    let listener = CliListener::new();
    let mut form = FormModel::new();

    println!("{}", "Predict Reversible Capacity".emphasis());
    println!(
        "{}",
        format!("Model endpoint: {}", controller.service().endpoint()).muted()
    );
    println!();

    loop {
        prompt_biomass(&theme, &mut form)?;
        for feature in Feature::ALL {
            prompt_feature(&theme, &mut form, feature)?;
        }

        if form.is_complete() {
            controller.submit(&form, &listener).await?;
        } else {
            let missing: Vec<_> = form.missing_fields().iter().map(|f| f.label()).collect();
            eprintln!("{} Incomplete form: {}", cross(), missing.join(", "));
        }
        println!();

        let again = Confirm::with_theme(&theme)
            .with_prompt("Predict again?")
            .default(true)
            .interact()
            .context("failed to read confirmation")?;
        if !again {
            break;
        }
    }

    Ok(())
}

fn prompt_biomass(theme: &ColorfulTheme, form: &mut FormModel) -> Result<()> {
    let current = BIOMASS_CATALOG
        .iter()
        .position(|b| *b == form.category())
        .unwrap_or_default();

    let index = Select::with_theme(theme)
        .with_prompt("Biomass")
        .items(BIOMASS_CATALOG)
        .default(current)
        .interact()
        .context("failed to read biomass selection")?;

    form.set_category(BIOMASS_CATALOG[index]);
    Ok(())
}

fn prompt_feature(theme: &ColorfulTheme, form: &mut FormModel, feature: Feature) -> Result<()> {
    let value = Input::<String>::with_theme(theme)
        .with_prompt(feature.label())
        .with_initial_text(form.value(feature))
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if is_number_shaped(input) {
                Ok(())
            } else {
                Err("enter a number without spaces, e.g. 1200, 0.85 or 1e3")
            }
        })
        .interact_text()
        .with_context(|| format!("failed to read {}", feature.label()))?;

    form.set(feature, value);
    Ok(())
}
