//! Collision-free destination names for bundled artifacts.
use std::collections::{HashMap, HashSet};

/// Assigns unique basenames inside a bundle's `model/` directory.
///
/// The first request for a name returns it unchanged; the n-th request
/// returns `{stem}.{n}{ext}`. One namer covers one planning pass, so names
/// never leak between runs.
///
/// Returned names are pairwise distinct even when a requested name happens
/// to equal one synthesized earlier (`x.gz`, `x.gz`, `x.2.gz`): the counter
/// for the later request is advanced past the taken name.
///
/// # Examples
///
/// ```
/// use joshua_bundle::naming::DestinationNamer;
///
/// let mut namer = DestinationNamer::new();
/// assert_eq!(namer.assign("lm.kenlm"), "lm.kenlm");
/// assert_eq!(namer.assign("lm.kenlm"), "lm.2.kenlm");
/// assert_eq!(namer.assign("lm.kenlm"), "lm.3.kenlm");
/// assert_eq!(namer.assign("grammar"), "grammar");
/// ```
#[derive(Debug, Default)]
pub struct DestinationNamer {
    seen: HashMap<String, usize>,
    assigned: HashSet<String>,
}

impl DestinationNamer {
    /// Create a namer that has seen nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the destination basename for the next artifact called `name`.
    pub fn assign(&mut self, name: &str) -> String {
        let times_seen = self.seen.entry(name.to_string()).or_insert(0);
        loop {
            *times_seen += 1;
            let candidate = if *times_seen == 1 {
                name.to_string()
            } else {
                let (stem, ext) = split_extension(name);
                format!("{stem}.{times_seen}{ext}")
            };
            if self.assigned.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// Split `name` into stem and extension, the extension keeping its dot.
///
/// Leading dots belong to the stem, so `.hidden` has no extension.
fn split_extension(name: &str) -> (&str, &str) {
    let leading = name.len() - name.trim_start_matches('.').len();
    name.get(leading..)
        .and_then(|rest| rest.rfind('.'))
        .map_or((name, ""), |dot| name.split_at(leading + dot))
}
