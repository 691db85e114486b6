//! # Generate Subcommands
//!
//! `codfis args` reads the personal data from positional arguments;
//! `codfis input` prompts for each field on stdin. Both hand a
//! [`PersonalData`] to the builder and print the result.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Args;

use codfis_core::{PersonalData, TaxCodeBuilder};

use crate::output::{emit, OutputFormat};

/// Prompts shown by `codfis input`, in reading order.
pub const PROMPTS: [&str; 5] = [
    "Nome> ",
    "Cognome> ",
    "Sesso (M/F)> ",
    "Data (gg/mm/aaaa)> ",
    "Comune> ",
];

/// Arguments for the `codfis args` subcommand.
#[derive(Args, Debug, Clone)]
pub struct FromArgs {
    /// The given name.
    pub name: String,

    /// The surname.
    pub surname: String,

    /// The sex.
    #[arg(value_parser = ["m", "M", "f", "F"])]
    pub sex: String,

    /// The date of birth in DD/MM/YYYY format.
    pub dob: String,

    /// The place of birth (municipality or foreign country).
    pub place: String,
}

/// Execute `codfis args`.
pub fn run_args(
    args: &FromArgs,
    builder: &TaxCodeBuilder,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<u8> {
    let data = PersonalData::parse(&args.name, &args.surname, &args.sex, &args.dob, &args.place)
        .context("invalid personal data")?;
    generate(&data, builder, format, out)
}

/// Execute `codfis input`, prompting on `prompt_out` and reading answers
/// line by line from `input`.
pub fn run_input(
    input: &mut impl BufRead,
    prompt_out: &mut impl Write,
    builder: &TaxCodeBuilder,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<u8> {
    let data = read_personal_data(input, prompt_out)?;
    generate(&data, builder, format, out)
}

/// Prompt for and parse the five input fields.
pub fn read_personal_data(
    input: &mut impl BufRead,
    prompt_out: &mut impl Write,
) -> Result<PersonalData> {
    let mut answers: Vec<String> = Vec::with_capacity(PROMPTS.len());
    for prompt in PROMPTS {
        write!(prompt_out, "{prompt}")?;
        prompt_out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("unexpected end of input at prompt {:?}", prompt.trim_end());
        }
        answers.push(line.trim_end_matches(['\r', '\n']).to_string());
    }

    PersonalData::parse(&answers[0], &answers[1], &answers[2], &answers[3], &answers[4])
        .context("invalid personal data")
}

fn generate(
    data: &PersonalData,
    builder: &TaxCodeBuilder,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<u8> {
    let code = builder
        .build(data)
        .with_context(|| format!("cannot compute tax code for {:?}", data.place_of_birth()))?;
    emit(out, data, &code, format)?;
    Ok(0)
}
