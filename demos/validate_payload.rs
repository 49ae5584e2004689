//! Decodes and validates an MFA provider payload passed as the first argument, falling back to a
//! built-in sample.

// std
use std::env;
// crates.io
use color_eyre::Result;
// self
use mfa_provider::provider::{self, GoogleAuthenticatorConfig};

const SAMPLE: &str = r#"{
	"name": "CorpTotp",
	"identityZoneId": "uaa",
	"config": "{\"issuer\":\"Corp\",\"digits\":6}"
}"#;

fn main() -> Result<()> {
	color_eyre::install()?;

	let raw = env::args().nth(1).unwrap_or_else(|| SAMPLE.to_owned());
	let provider = provider::deserialize(&raw)?;

	println!("Decoded kind: {:?}", provider.kind());

	match provider.validate() {
		Ok(()) => {
			let config = provider.config_as::<GoogleAuthenticatorConfig>()?;

			println!(
				"Accepted `{}` with {} digit codes.",
				provider.name().unwrap_or_default(),
				config.digits
			);
		},
		Err(e) => println!("Rejected ({}): {e}", e.kind()),
	}

	println!("{}", serde_json::to_string_pretty(&provider)?);

	Ok(())
}
