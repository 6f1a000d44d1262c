//! Compilation of validated flake declarations into generated Nix fragments
//!
//! [`compile`] is a pure, deterministic transformation: no I/O, no error
//! paths, byte-identical output for identical input. It assumes the
//! collection already passed [`crate::flake::validate_flakes`]; feeding it
//! unvalidated declarations is a caller contract violation.

use crate::flake::value::{ArgValue, quote};
use crate::flake::{Flake, OutputType};
use crate::identity::Identity;

/// Generated Nix text fragments, spliced into the flake.nix skeleton
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlakeFragments {
    /// Input attrset entries, one per flake, with follows overrides
    pub input_block: String,

    /// Outputs function parameters: `name, ` per flake, declaration order
    pub param_list: String,

    /// Machine-wide module invocations, one entry per `system` output
    pub system_modules: Vec<String>,

    /// Per-user module invocations, one entry per `home` output
    pub home_modules: Vec<String>,
}

/// Compile validated flake declarations into generated text fragments
///
/// Entries preserve declaration order across flakes and output order within
/// a flake. Every output of a flake gets the full argument block again:
/// identity assignments first, then the flake's own arguments sorted by
/// name. There is no deduplication across outputs of the same flake.
pub fn compile(identity: &Identity, flakes: &[Flake]) -> FlakeFragments {
    let mut fragments = FlakeFragments::default();

    for flake in flakes {
        fragments.input_block.push_str(&input_entry(flake));
        fragments.param_list.push_str(&flake.name);
        fragments.param_list.push_str(", ");

        let args_block = module_args(identity, flake);
        for output in &flake.outputs {
            let entry = format!("{}.{} {}", flake.name, output.name, args_block);
            match OutputType::parse(&output.kind) {
                Some(OutputType::System) => fragments.system_modules.push(entry),
                Some(OutputType::Home) => fragments.home_modules.push(entry),
                // Unreachable after validation; skip rather than guess a list
                None => {}
            }
        }
    }

    fragments
}

/// One entry for the generated `inputs` attrset
fn input_entry(flake: &Flake) -> String {
    let mut entry = format!("    {} = {{\n      url = {};\n", flake.name, quote(&flake.url));
    for (input, target) in &flake.follows {
        entry.push_str(&format!(
            "      inputs.{}.follows = {};\n",
            input,
            quote(target)
        ));
    }
    entry.push_str("    };\n");
    entry
}

/// The argument attrset passed to each of a flake's module invocations
fn module_args(identity: &Identity, flake: &Flake) -> String {
    let mut parts = vec![
        format!("userName = {};", quote(&identity.user_name)),
        format!("hostName = {};", quote(&identity.host_name)),
        format!("home = {};", quote(&identity.home)),
    ];

    for (name, value) in &flake.args {
        // Out-of-lattice values are unreachable after validation
        let rendered = ArgValue::from_yaml(value)
            .map_or_else(|_| "null".to_string(), |arg| arg.render());
        parts.push(format!("{name} = {rendered};"));
    }

    format!("{{ {} }}", parts.join(" "))
}
