use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::debug;

use mutanabi_client::{ClientSettings, GenerationClient};
use mutanabi_core::{CLOCK_PERIOD, ClockSubscription, Completion, SubmissionController};
use mutanabi_model::{Field, FieldErrors, Label};
use mutanabi_validate::validate;

use mutanabi_cli::render::{
    check_json, errors_table, field_json, field_table, input_table, poem_heading,
};

use crate::cli::{CheckArgs, CheckFormatArg, ClockArgs, FormArgs, GenerateArgs};

/// Outcome of a command, mapped to the process exit code.
pub enum Outcome {
    Success,
    Rejected,
}

pub async fn run_generate(args: &GenerateArgs) -> Result<Outcome> {
    let settings = ClientSettings::with_endpoint(&args.endpoint).timeout(args.timeout);
    let client = GenerationClient::new(&settings).context("create generation client")?;
    debug!(endpoint = client.endpoint(), timeout = ?args.timeout, "generation client ready");

    let mut controller = SubmissionController::new();
    fill_form(&mut controller, &args.form);

    let submission = match controller.begin_submit() {
        Ok(submission) => submission,
        Err(errors) => {
            print_errors(&errors);
            return Ok(Outcome::Rejected);
        }
    };
    eprintln!("{}", controller.submit_label().text());

    let request = client.generate(&submission.input);
    let result = if args.clock {
        let mut clock = ClockSubscription::mount(CLOCK_PERIOD);
        eprintln!("{}", clock.current());
        tokio::pin!(request);
        loop {
            tokio::select! {
                result = &mut request => break result,
                Some(now) = clock.changed() => eprintln!("{now}"),
            }
        }
    } else {
        request.await
    };

    match controller.complete(submission.id, result) {
        Completion::Succeeded => {
            let poem = controller.result_text().unwrap_or_default();
            println!("{}\n", poem_heading());
            println!("{poem}");
            Ok(Outcome::Success)
        }
        // Failures were logged by the controller; nothing else is shown.
        Completion::Failed | Completion::Superseded => Ok(Outcome::Rejected),
    }
}

pub fn run_check(args: &CheckArgs) -> Result<Outcome> {
    let mut controller = SubmissionController::new();
    fill_form(&mut controller, &args.form);
    if let Some(field) = args.field {
        return check_field(&mut controller, field, args.format);
    }
    let form = controller.form();
    let result = validate(&form.word, &form.count);

    match args.format {
        CheckFormatArg::Json => print_json(&check_json(&result))?,
        CheckFormatArg::Table => match &result {
            Ok(input) => println!("{}", input_table(input)),
            Err(errors) => print_errors(errors),
        },
    }

    Ok(if result.is_ok() {
        Outcome::Success
    } else {
        Outcome::Rejected
    })
}

fn check_field(
    controller: &mut SubmissionController,
    field: Field,
    format: CheckFormatArg,
) -> Result<Outcome> {
    let valid = controller.blur(field);
    let form = controller.form();
    match format {
        CheckFormatArg::Json => print_json(&field_json(field, form))?,
        CheckFormatArg::Table if valid => println!("{}", field_table(field, form)),
        CheckFormatArg::Table => print_errors(&form.field_errors),
    }
    Ok(if valid {
        Outcome::Success
    } else {
        Outcome::Rejected
    })
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("write json")?;
    writeln!(stdout).context("write json")?;
    Ok(())
}

pub async fn run_clock(args: &ClockArgs) -> Result<Outcome> {
    let mut clock = ClockSubscription::mount(CLOCK_PERIOD);
    println!("{}", clock.current());
    for _ in 1..args.ticks {
        match clock.changed().await {
            Some(now) => println!("{now}"),
            None => break,
        }
    }
    clock.unmount();
    Ok(Outcome::Success)
}

fn fill_form(controller: &mut SubmissionController, form: &FormArgs) {
    if form.typed {
        let rejected_word = form
            .word
            .chars()
            .filter(|&ch| !controller.key_press_word(ch))
            .count();
        let rejected_count = form
            .count
            .chars()
            .filter(|&ch| !controller.key_press_count(ch))
            .count();
        debug!(rejected_word, rejected_count, "filtered typed input");
    } else {
        controller.edit_word(form.word.as_str());
        controller.edit_count(&form.count);
    }
}

fn print_errors(errors: &FieldErrors) {
    let label = |field: Field| match field {
        Field::Word => Label::WordField.text(),
        Field::Count => Label::CountField.text(),
    };
    for field in errors.keys() {
        eprintln!("{}: {}", label(*field), errors[field]);
    }
    eprintln!("{}", errors_table(errors));
}
