/*
[INPUT]:  Task-type listing and optional result markup
[OUTPUT]: Full HTML page with selection form and component table
[POS]:    Web layer - page rendering
[UPDATE]: When the page layout or client-side scripts change
*/

use taskbuilder_adapter::TaskType;
use taskbuilder_report::escape_html;

/// Client-side helpers: select-all toggle and Excel-friendly table copy
const PAGE_SCRIPT: &str = r#"
        function toggleSelectAll(source) {
            let checkboxes = document.getElementsByName('task_ids');
            for (let i = 0; i < checkboxes.length; i++) {
                checkboxes[i].checked = source.checked;
            }
        }

        function copyTableToClipboard() {
            let table = document.getElementById("taskTable");
            if (!table) {
                alert("No table to copy!");
                return;
            }

            let range = document.createRange();
            range.selectNode(table);
            window.getSelection().removeAllRanges();
            window.getSelection().addRange(range);

            try {
                document.execCommand('copy');
                alert("Table copied! You can now paste it into Excel.");
            } catch (err) {
                alert("Failed to copy table: " + err);
            }

            window.getSelection().removeAllRanges();
        }
"#;

/// Render the full page: selection form plus the optional result section.
///
/// `result` is pre-rendered markup (the component table or an error/empty
/// message); task names and ids are escaped here.
pub fn page(task_types: &[TaskType], result: Option<&str>) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n    <title>Task Fetcher</title>\n    <script>",
    );
    html.push_str(PAGE_SCRIPT);
    html.push_str("    </script>\n</head>\n<body>\n    <h2>Fetch Task Definition</h2>\n");
    html.push_str("    <form method=\"post\">\n");

    if task_types.is_empty() {
        html.push_str("        <p>No tasks found.</p>\n");
    } else {
        html.push_str(
            "        <label><input type=\"checkbox\" onclick=\"toggleSelectAll(this)\"> Select All</label><br><br>\n",
        );
        for task in task_types {
            let id = escape_html(&task.id);
            let name = escape_html(&task.name);
            html.push_str(&format!(
                "        <input type=\"checkbox\" name=\"task_ids\" value=\"{id}\"> {name} ({id})<br>\n",
            ));
        }
    }

    html.push_str("        <br>\n        <input type=\"submit\" value=\"Fetch Definition\">\n    </form>\n");

    if let Some(result) = result {
        html.push_str("    <h3>Task Components:</h3>\n");
        html.push_str(
            "    <button onclick=\"copyTableToClipboard()\">Copy Table to Excel</button><br><br>\n",
        );
        html.push_str("    ");
        html.push_str(result);
        html.push('\n');
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tasks() -> Vec<TaskType> {
        vec![
            TaskType {
                id: "tt-1".to_string(),
                name: "Install".to_string(),
            },
            TaskType {
                id: "tt-2".to_string(),
                name: "Repair & Replace".to_string(),
            },
        ]
    }

    #[test]
    fn test_page_lists_tasks_as_checkboxes() {
        let html = page(&sample_tasks(), None);
        assert!(html.contains("name=\"task_ids\" value=\"tt-1\""));
        assert!(html.contains("Install (tt-1)"));
        assert!(html.contains("Select All"));
        assert!(!html.contains("Task Components:"));
    }

    #[test]
    fn test_page_escapes_task_names() {
        let html = page(&sample_tasks(), None);
        assert!(html.contains("Repair &amp; Replace"));
    }

    #[test]
    fn test_page_without_tasks_shows_message() {
        let html = page(&[], None);
        assert!(html.contains("No tasks found."));
        assert!(!html.contains("task_ids"));
    }

    #[test]
    fn test_page_with_result_embeds_markup() {
        let html = page(&sample_tasks(), Some("<table id=\"taskTable\"></table>"));
        assert!(html.contains("Task Components:"));
        assert!(html.contains("copyTableToClipboard()"));
        assert!(html.contains("<table id=\"taskTable\"></table>"));
    }
}
