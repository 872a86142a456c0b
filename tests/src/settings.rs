#[cfg(test)]
mod tests {
    use lanetrace::{BuildSettings, Error, OverflowPolicy};

    #[test]
    fn defaults() {
        let settings = BuildSettings::default();
        assert_eq!(settings.overflow, OverflowPolicy::Reject);
        assert_eq!(settings.min_batch_size, 2);
        assert!(!settings.bound_batches);
        assert_eq!(OverflowPolicy::default(), OverflowPolicy::Reject);
    }

    #[test]
    fn from_yaml() {
        let settings = BuildSettings::from_yaml_str(
            "overflow: Truncate\nmin_batch_size: 4\nbound_batches: true\n",
        )
        .expect("valid yaml");
        assert_eq!(
            settings,
            BuildSettings {
                overflow: OverflowPolicy::Truncate,
                min_batch_size: 4,
                bound_batches: true,
            }
        );
    }

    #[test]
    fn missing_fields_keep_defaults() {
        let settings = BuildSettings::from_yaml_str("bound_batches: true").expect("valid yaml");
        assert_eq!(
            settings,
            BuildSettings {
                bound_batches: true,
                ..Default::default()
            }
        );
        assert_eq!(
            BuildSettings::from_yaml_str("{}").expect("valid yaml"),
            BuildSettings::default()
        );
    }

    #[test]
    fn invalid_yaml() {
        for yaml in [
            "overflow: Wrap",
            "min_batch_size: -1",
            "bound_batches: [1, 2]",
        ] {
            assert!(
                matches!(BuildSettings::from_yaml_str(yaml), Err(Error::Settings(_))),
                "{}",
                yaml
            );
        }
    }

    #[test]
    fn yaml_round_trip() {
        let settings = BuildSettings {
            overflow: OverflowPolicy::Truncate,
            min_batch_size: 8,
            bound_batches: true,
        };
        let yaml = settings.to_yaml_string().expect("serializable");
        assert!(yaml.contains("Truncate"));
        assert_eq!(
            BuildSettings::from_yaml_str(&yaml).expect("own output parses"),
            settings
        );
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "lanetrace_settings_{}.yaml",
            std::process::id()
        ));
        std::fs::write(&path, "min_batch_size: 3\n").expect("temp dir is writable");
        let settings = BuildSettings::load(&path);
        std::fs::remove_file(&path).expect("file was just written");
        assert_eq!(settings.expect("valid file").min_batch_size, 3);

        assert!(matches!(
            BuildSettings::load(path.with_extension("missing")),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn policy_names() {
        assert_eq!(OverflowPolicy::Truncate.to_string(), "Truncate");
        assert_eq!("Reject".parse::<OverflowPolicy>(), Ok(OverflowPolicy::Reject));
        assert!("Wrap".parse::<OverflowPolicy>().is_err());
    }
}
