use crate::prelude::{println, *};
use foobarqix_core::{Classification, Composer, Placement};

/// Validate and classify `input`, then print it in the format picked by the global flags
pub fn classify_and_print(composer: &Composer, input: String, global: &crate::Global) -> Result<()> {
    let classification = composer.classify(input)?;

    log::debug!("Validated input: {}", classification.input);
    for part in &classification.parts {
        log::debug!(
            "{} ({}): {:?}",
            part.transformation,
            placement_name(part.placement),
            part.output
        );
    }

    if global.json {
        println!("{}", to_json(&classification)?);
    } else if global.explain {
        explain_table(&classification).printstd();
    } else {
        println!("{}", classification.output);
    }

    Ok(())
}

fn to_json(classification: &Classification) -> Result<String> {
    serde_json::to_string_pretty(classification).context("Failed to serialize classification")
}

/// One row per transformation, followed by the composed output
fn explain_table(classification: &Classification) -> prettytable::Table {
    let mut table = new_table();
    table.add_row(prettytable::row!["Transformation", "Placement", "Output"]);

    for part in &classification.parts {
        let output = if part.output.is_empty() {
            "-"
        } else {
            part.output.as_str()
        };
        table.add_row(prettytable::row![
            part.transformation,
            placement_name(part.placement),
            output
        ]);
    }

    table.add_row(prettytable::row!["result", "", classification.output]);

    table
}

fn placement_name(placement: Placement) -> &'static str {
    match placement {
        Placement::Joined => "joined",
        Placement::Appended => "appended",
    }
}
