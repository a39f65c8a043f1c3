use crate::config::UpnJob;
use crate::core::name_parser::parse_full_name;
use crate::core::upn::generate_upns;
use crate::domain::model::CandidateSet;
use crate::domain::ports::WordlistStore;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpnReport {
    pub upns: Vec<String>,
    pub output_path: Option<String>,
}

/// Runs a resolved [`UpnJob`]: parse, generate, print, then persist.
pub struct UpnEngine<S: WordlistStore> {
    storage: S,
}

impl<S: WordlistStore> UpnEngine<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn run<W: Write>(&self, job: &UpnJob, out: &mut W) -> Result<UpnReport> {
        let mut all = CandidateSet::new();

        for user in &job.users {
            let components = parse_full_name(user)?;

            if job.verbose {
                writeln!(out, "Parsed name components:")?;
                writeln!(out, "  First name: {}", components.first)?;
                writeln!(out, "  Middle names: {:?}", components.middles)?;
                writeln!(out, "  Last name: {}", components.last)?;
                writeln!(out, "  Domain: {}", job.domain)?;
                writeln!(out)?;
            }

            let upns = generate_upns(&components, &job.domain);
            tracing::info!("Generated {} UPNs for '{}'", upns.len(), user);
            all.extend(upns);
        }

        let upns: Vec<String> = all.into_iter().collect();

        writeln!(out, "Generated {} possible UPN combinations:", upns.len())?;
        writeln!(out, "{}", "=".repeat(50))?;
        for upn in &upns {
            writeln!(out, "{}", upn)?;
        }

        let output_path = match &job.output {
            Some(path) => {
                let written = self.storage.write_lines(path, &upns)?;
                writeln!(out)?;
                writeln!(out, "UPNs saved to {}", path)?;
                Some(written)
            }
            None => None,
        };

        Ok(UpnReport { upns, output_path })
    }
}
