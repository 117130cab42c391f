//! CSV output through the `csv` crate.
//!
//! Several reports become one table: a leading `report` column names the
//! source, and the header is the union of the layouts' headers in order.
//! Cells for columns a report does not have are left empty.

use netsift_client::ResultRecord;

use super::{MISSING_PLACEHOLDER, RenderError, ReportLayout, ReportOutput};

pub(super) fn render(layout: &ReportLayout, records: &[ResultRecord]) -> Result<String, RenderError> {
    let mut w = ::csv::Writer::from_writer(Vec::new());

    w.write_record(layout.headers())?;
    for record in records {
        w.write_record(
            layout
                .columns
                .iter()
                .map(|c| record.get(c.field).unwrap_or(MISSING_PLACEHOLDER)),
        )?;
    }

    finish(w)
}

pub(super) fn render_combined(reports: &[ReportOutput<'_>]) -> Result<String, RenderError> {
    let mut headers: Vec<&str> = Vec::new();
    for (layout, _) in reports {
        for header in layout.headers() {
            if !headers.contains(&header) {
                headers.push(header);
            }
        }
    }

    let mut w = ::csv::Writer::from_writer(Vec::new());
    w.write_record(std::iter::once("report").chain(headers.iter().copied()))?;
    for (layout, records) in reports {
        for record in records {
            let cells = headers.iter().map(|header| {
                match layout.columns.iter().find(|c| c.header == *header) {
                    Some(column) => record.get(column.field).unwrap_or(MISSING_PLACEHOLDER),
                    None => "",
                }
            });
            w.write_record(std::iter::once(layout.key).chain(cells))?;
        }
    }

    finish(w)
}

fn finish(w: ::csv::Writer<Vec<u8>>) -> Result<String, RenderError> {
    let buffer = w
        .into_inner()
        .map_err(|e| RenderError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::{PA_DHCP, WINDOWS_DHCP};

    #[test]
    fn test_header_only_when_empty() {
        let output = render(&PA_DHCP, &[]).unwrap();
        assert_eq!(output, "generated_time,dvc_name,description\n");
    }

    #[test]
    fn test_values_are_quoted_when_needed() {
        let record: ResultRecord = [
            ("generated_time", "2024/01/15 10:30:00"),
            ("dvc_name", "fw01"),
            ("description", "lease renewed, \"wks01\""),
        ]
        .into_iter()
        .collect();

        let output = render(&PA_DHCP, &[record]).unwrap();
        let row = output.lines().nth(1).unwrap();

        assert_eq!(row, "2024/01/15 10:30:00,fw01,\"lease renewed, \"\"wks01\"\"\"");
    }

    #[test]
    fn test_missing_fields_use_placeholder() {
        let record: ResultRecord = [("mac", "AABBCCDDEEFF")].into_iter().collect();

        let output = render(&WINDOWS_DHCP, &[record]).unwrap();
        let row = output.lines().nth(1).unwrap();

        assert_eq!(
            row,
            "Missing.,Missing.,Missing.,Missing.,Missing.,AABBCCDDEEFF,Missing.,Missing."
        );
    }

    #[test]
    fn test_combined_reports_share_one_header() {
        let lease: ResultRecord = [("mac", "AABBCCDDEEFF"), ("description", "lease")]
            .into_iter()
            .collect();
        let event: ResultRecord = [("dvc_name", "fw01"), ("description", "renew")]
            .into_iter()
            .collect();

        let output = render_combined(&[
            (&WINDOWS_DHCP, vec![lease]),
            (&PA_DHCP, vec![event]),
        ])
        .unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            [
                "report,date,time,description,dest,dest_ip,mac,signature,host,generated_time,dvc_name",
                "windows_dhcp,Missing.,Missing.,lease,Missing.,Missing.,AABBCCDDEEFF,Missing.,Missing.,,",
                "pa_dhcp,,,renew,,,,,,Missing.,fw01",
            ]
        );
    }
}
