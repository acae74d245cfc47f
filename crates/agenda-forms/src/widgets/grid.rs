//! The clickable weekly availability grid.
//!
//! The profile form renders a 7x24 table of cells the drag-select script
//! wires up, plus a hidden input carrying the interval-list JSON. The
//! read-only profile page shows the same data as a compact table of
//! `HH:MM - HH:MM` ranges per weekday.

use agenda_availability::codec;
use agenda_availability::{WeeklySchedule, DAYS_PER_WEEK, HOURS_PER_DAY};

use super::{html_escape, Widget, WidgetAttrs};

/// One-letter weekday headers, Sunday first.
const DAY_HEADERS: [&str; DAYS_PER_WEEK] = ["D", "S", "T", "Q", "Q", "S", "S"];

/// Cell classes the drag-select script toggles.
const SELECTED_CLASS: &str = "bg-secondary";
const UNSELECTED_CLASS: &str = "bg-body-secondary";

/// Renders the editable grid plus the hidden interval-list input.
///
/// Each cell carries `data-grade`, its row and column as `data-linha`
/// (weekday, 0 = Sunday) and `data-coluna` (hour), and `data-selecionado`;
/// the script reads those to sync the cells with the hidden input.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityGridWidget;

impl AvailabilityGridWidget {
    /// Creates a new grid widget.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn render_cell(selected: bool, weekday: usize, hour: usize) -> String {
        let (class, state) = if selected {
            (SELECTED_CLASS, "true")
        } else {
            (UNSELECTED_CLASS, "false")
        };
        format!(
            r#"<td data-grade data-linha="{weekday}" data-coluna="{hour}" data-selecionado="{state}" class="{class}" draggable="false"></td>"#
        )
    }
}

impl Widget for AvailabilityGridWidget {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let grid = value
            .and_then(|v| codec::decode_json(v).ok())
            .unwrap_or_default();

        let hidden_value = value.map(html_escape).unwrap_or_else(|| "[]".to_string());

        let id = attrs
            .get("id")
            .cloned()
            .unwrap_or_else(|| format!("id_{name}"));

        let mut head = String::from("<tr><th></th>");
        for header in DAY_HEADERS {
            head.push_str(&format!(r#"<th scope="col">{header}</th>"#));
        }
        head.push_str("</tr>");

        let rows: Vec<_> = grid.rows().collect();
        let mut body = String::new();
        for hour in 0..HOURS_PER_DAY {
            body.push_str(&format!(r#"<tr><th scope="row">{hour:02}:00</th>"#));
            for (weekday, row) in rows.iter().enumerate() {
                body.push_str(&Self::render_cell(row[hour], weekday, hour));
            }
            body.push_str("</tr>");
        }

        format!(
            r#"<input type="hidden" name="{name}" id="{id}" value="{hidden_value}"><table class="table table-bordered text-center align-middle"><thead>{head}</thead><tbody>{body}</tbody></table>"#
        )
    }

    fn input_type(&self) -> &str {
        "hidden"
    }
}

/// Renders the `<tbody>` rows of the read-only availability table shown on
/// profile pages.
///
/// Columns are weekdays (Sunday first); each row holds one interval per
/// day, padded with `-` where a day has fewer intervals than the busiest
/// one. An empty schedule yields no rows.
#[must_use]
pub fn availability_table_body(schedule: &WeeklySchedule) -> String {
    let per_day: Vec<Vec<String>> = (1..=DAYS_PER_WEEK as u8)
        .map(|weekday| {
            schedule
                .intervals_for(weekday)
                .iter()
                .map(|interval| format!("{} - {}", interval.start, interval.end))
                .collect()
        })
        .collect();

    let rows = per_day.iter().map(Vec::len).max().unwrap_or(0);

    let mut html = String::new();
    for row in 0..rows {
        html.push_str("<tr>");
        for intervals in &per_day {
            let cell = intervals.get(row).map_or("-", String::as_str);
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>");
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(json: &str) -> WeeklySchedule {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn grid_renders_all_cells() {
        let widget = AvailabilityGridWidget::new();
        let html = widget.render("disponibilidade", None, &WidgetAttrs::new());
        assert_eq!(html.matches("data-grade").count(), 7 * 24);
        assert!(html.contains(r#"<input type="hidden" name="disponibilidade" id="id_disponibilidade" value="[]">"#));
        assert!(html.contains(r#"<th scope="row">00:00</th>"#));
        assert!(html.contains(r#"<th scope="row">23:00</th>"#));
    }

    #[test]
    fn grid_marks_selected_cells() {
        let widget = AvailabilityGridWidget::new();
        let value = r#"[{"dia_semana":3,"intervalos":[{"horario_inicio":"09:00","horario_fim":"10:00"}]}]"#;
        let html = widget.render("disponibilidade", Some(value), &WidgetAttrs::new());
        assert!(html.contains(
            r#"data-linha="2" data-coluna="9" data-selecionado="true" class="bg-secondary""#
        ));
        assert!(html.contains(
            r#"data-linha="2" data-coluna="10" data-selecionado="false" class="bg-body-secondary""#
        ));
    }

    #[test]
    fn grid_escapes_the_hidden_value() {
        let widget = AvailabilityGridWidget::new();
        let html = widget.render("disponibilidade", Some("[]"), &WidgetAttrs::new());
        assert!(html.contains(r#"value="[]""#));
    }

    #[test]
    fn table_body_transposes_and_pads() {
        let s = schedule(
            r#"[
                {"dia_semana":2,"intervalos":[
                    {"horario_inicio":"08:00","horario_fim":"12:00"},
                    {"horario_inicio":"14:00","horario_fim":"18:00"}
                ]},
                {"dia_semana":6,"intervalos":[
                    {"horario_inicio":"09:00","horario_fim":"11:00"}
                ]}
            ]"#,
        );
        let html = availability_table_body(&s);
        assert_eq!(html.matches("<tr>").count(), 2);
        assert_eq!(
            html,
            "<tr><td>-</td><td>08:00 - 12:00</td><td>-</td><td>-</td><td>-</td>\
             <td>09:00 - 11:00</td><td>-</td></tr>\
             <tr><td>-</td><td>14:00 - 18:00</td><td>-</td><td>-</td><td>-</td>\
             <td>-</td><td>-</td></tr>"
        );
    }

    #[test]
    fn table_body_empty_schedule() {
        let s = schedule("[]");
        assert_eq!(availability_table_body(&s), "");
    }
}
