//! Output formatter implementations.

use super::{OutputFormatter, PathReport};
use crate::Result;

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &PathReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, report: &PathReport) -> Result<String> {
        Ok(serde_yaml::to_string(report)?)
    }
}

/// Formatter for human-readable output.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &PathReport) -> Result<String> {
        let mut lines = vec![
            format!("path:    {}", report.path),
            format!("kind:    {}", report.kind),
            format!("depth:   {}", report.depth),
        ];
        if !report.defined {
            lines.push("defined: no".to_string());
        }

        lines.push("segments:".to_string());
        for segment in &report.segments {
            match &segment.id {
                Some(id) => lines.push(format!(
                    "  {:<14} {id}",
                    segment.element_type.to_string()
                )),
                None => lines.push(format!("  {}", segment.code)),
            }
        }

        if !report.ids.is_empty() {
            lines.push("ids:".to_string());
            for (name, id) in &report.ids {
                lines.push(format!("  {name:<14} {id}"));
            }
        }

        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use crate::Path;

    fn report(text: &str) -> PathReport {
        PathReport::new(&text.parse::<Path>().unwrap())
    }

    #[test]
    fn test_text_formatter() {
        let text = TextFormatter.format(&report("/t;acme/e;prod")).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "path:    /t;acme/e;prod");
        assert_eq!(lines[1], "kind:    canonical");
        assert_eq!(lines[2], "depth:   1");
        assert!(text.contains("  tenant         acme"));
        assert!(text.contains("  environment    prod"));
        assert!(text.contains("ids:"));
    }

    #[test]
    fn test_text_formatter_undefined_view() {
        let path: crate::CanonicalPath = "/t;acme".parse().unwrap();
        let report = PathReport::new(&Path::Canonical(path.up()));
        let text = TextFormatter.format(&report).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[2], "depth:   -1");
        assert_eq!(lines[3], "defined: no");
        assert_eq!(lines.last(), Some(&"segments:"));
    }

    #[test]
    fn test_text_formatter_up_segment() {
        let text = TextFormatter.format(&report("../m;x")).unwrap();
        assert!(text.lines().any(|l| l == "  .."));
        assert!(!text.contains("ids:"));
    }

    #[test]
    fn test_json_formatter() {
        let json = JsonFormatter.format(&report("/t;a/rt;b")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "canonical");
        assert_eq!(value["segments"][1]["type"], "resource_type");
        assert_eq!(value["segments"][1]["code"], "rt");
        assert_eq!(value["ids"]["resource_type"], "b");
    }

    #[test]
    fn test_yaml_formatter_round_trips() {
        let original = report("../../f;x/r;y");
        let yaml = YamlFormatter.format(&original).unwrap();
        let back: PathReport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_create_formatter() {
        let r = report("/t;a");
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml] {
            let out = format.create_formatter().format(&r).unwrap();
            assert!(out.contains("t;a") || out.contains("\"t;a\""));
        }
    }
}
