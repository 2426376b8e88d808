//! Building a selection from `name[@source]` command-line arguments

use roster_core::{Gesture, Result, Session, Source, Target};

/// Select each member named in `specs`, returning how many were added.
///
/// A spec is `name` or `name@source` (`source` is a team id, `absent` or
/// `unassigned`). Without a source the member's current location is used.
/// Members that are already selected stay selected.
pub fn select_members(session: &mut Session, specs: &[String]) -> Result<usize> {
    let mut added = 0;
    for spec in specs {
        let (name, source) = match spec.split_once('@') {
            Some((name, source)) => (name, source.parse::<Source>()?),
            None => {
                let source = session.store().locate(spec).unwrap_or(Source::Unassigned);
                (spec.as_str(), source)
            }
        };
        if session.selection().contains(name, source) {
            continue;
        }
        session.dispatch(
            Gesture::Click,
            Target::Member {
                name: name.to_string(),
                source,
            },
        );
        added += 1;
    }
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{NoDialogs, NoopSave, RosterConfig};

    fn session() -> Session {
        let config = RosterConfig::from_toml_str(
            "[[teams]]\nid = 1\nmembers = [\"Alice\", \"Bob\"]\n\n[[teams]]\nid = 2\nmembers = [\"Carol\"]\n",
        )
        .unwrap();
        Session::new(config, Box::new(NoopSave), Box::new(NoDialogs)).unwrap()
    }

    fn specs(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_repeated_name_selected_once() {
        let mut session = session();
        let added = select_members(&mut session, &specs(&["Alice", "Alice"])).unwrap();
        assert_eq!(added, 1);
        assert_eq!(session.selection().size(), 1);

        let report = session.assign_selection(2);
        assert_eq!(report.moved, 1);
        assert_eq!(session.store().team(2).unwrap().members, vec!["Carol", "Alice"]);
    }

    #[test]
    fn test_explicit_and_located_sources() {
        let mut session = session();
        let added = select_members(&mut session, &specs(&["Bob@1", "Bob", "Carol@2"])).unwrap();
        assert_eq!(added, 2);
        assert!(session.selection().contains("Bob", Source::Team(1)));
        assert!(session.selection().contains("Carol", Source::Team(2)));

        assert!(select_members(&mut session, &specs(&["Dave@nowhere"])).is_err());
    }
}
