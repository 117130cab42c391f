//! JSON output: an array of objects restricted to the layout's fields,
//! in column order. Several reports become one object keyed by report.

use netsift_client::ResultRecord;
use serde_json::{Map, Value};

use super::{RenderError, ReportLayout, ReportOutput};

pub(super) fn render(layout: &ReportLayout, records: &[ResultRecord]) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(&rows(layout, records))?)
}

pub(super) fn render_combined(reports: &[ReportOutput<'_>]) -> Result<String, RenderError> {
    let document: Map<String, Value> = reports
        .iter()
        .map(|(layout, records)| {
            let rows = rows(layout, records).into_iter().map(Value::Object).collect();
            (layout.key.to_string(), Value::Array(rows))
        })
        .collect();
    Ok(serde_json::to_string_pretty(&document)?)
}

fn rows(layout: &ReportLayout, records: &[ResultRecord]) -> Vec<Map<String, Value>> {
    records
        .iter()
        .map(|record| {
            layout
                .columns
                .iter()
                .map(|c| {
                    let value = record
                        .get(c.field)
                        .map_or(Value::Null, |v| Value::String(v.to_string()));
                    (c.field.to_string(), value)
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::{LOGONS, PA_DHCP, WINDOWS_DHCP};

    #[test]
    fn test_empty_array() {
        assert_eq!(render(&LOGONS, &[]).unwrap(), "[]");
    }

    #[test]
    fn test_only_layout_fields_are_kept() {
        let record: ResultRecord = [
            ("user", "alice"),
            ("host", "wks01"),
            ("EventCode", "4624"),
            ("_raw", "ignored"),
        ]
        .into_iter()
        .collect();
        let partial: ResultRecord = [("user", "bob")].into_iter().collect();

        let output = render(&LOGONS, &[record, partial]).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            parsed,
            serde_json::json!([
                {"user": "alice", "host": "wks01", "EventCode": "4624"},
                {"user": "bob", "host": null, "EventCode": null}
            ])
        );
    }

    #[test]
    fn test_keys_follow_column_order() {
        let record: ResultRecord = [("mac", "AABBCCDDEEFF"), ("date", "01/15/24")]
            .into_iter()
            .collect();

        let output = render(&WINDOWS_DHCP, &[record]).unwrap();
        let date = output.find("\"date\"").unwrap();
        let time = output.find("\"time\"").unwrap();
        let description = output.find("\"description\"").unwrap();
        let mac = output.find("\"mac\"").unwrap();
        let host = output.find("\"host\"").unwrap();
        assert!(date < time && time < description && description < mac && mac < host);
    }

    #[test]
    fn test_combined_reports_form_one_document() {
        let lease: ResultRecord = [("mac", "AABBCCDDEEFF")].into_iter().collect();
        let event: ResultRecord = [("description", "lease wks-042")].into_iter().collect();

        let output = render_combined(&[
            (&WINDOWS_DHCP, vec![lease]),
            (&PA_DHCP, vec![event]),
        ])
        .unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["windows_dhcp"][0]["mac"], "AABBCCDDEEFF");
        assert_eq!(parsed["pa_dhcp"][0]["description"], "lease wks-042");
        assert_eq!(parsed["pa_dhcp"][0]["dvc_name"], Value::Null);
        assert!(output.find("windows_dhcp").unwrap() < output.find("pa_dhcp").unwrap());
    }
}
