//! Server-rendered HTML for the calculator page.

use rust_decimal::Decimal;
use taxcalc_core::TaxAssessment;
use taxcalc_core::calculations::common::format_amount;

const CSS: &str = r#"
body {
    font-family: Arial, Helvetica, sans-serif;
    background-color: #f4f6f8;
    margin: 0;
    padding: 40px 16px;
}
.container {
    max-width: 480px;
    margin: 0 auto;
    background: #ffffff;
    border-radius: 8px;
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
    padding: 32px;
}
h1 {
    margin-top: 0;
    color: #2c3e50;
    text-align: center;
}
label {
    display: block;
    margin: 16px 0 4px;
    font-weight: bold;
    color: #34495e;
}
input[type="text"] {
    width: 100%;
    padding: 10px;
    border: 1px solid #ccd1d9;
    border-radius: 4px;
    box-sizing: border-box;
    font-size: 16px;
}
button {
    width: 100%;
    margin-top: 24px;
    padding: 12px;
    background-color: #2980b9;
    color: #ffffff;
    border: none;
    border-radius: 4px;
    font-size: 16px;
    cursor: pointer;
}
button:hover {
    background-color: #21618c;
}
.errors {
    background-color: #fdecea;
    border: 1px solid #e74c3c;
    border-radius: 4px;
    color: #c0392b;
    margin: 0 0 16px;
    padding: 12px 12px 12px 32px;
}
.results {
    background-color: #eafaf1;
    border: 1px solid #27ae60;
    border-radius: 4px;
    margin: 0 0 16px;
    padding: 16px;
}
.results p {
    margin: 4px 0;
    color: #1e8449;
}
.results .final {
    font-weight: bold;
    font-size: 18px;
}
"#;

/// Figures rendered after a successful calculation, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxFigures {
    pub total_income: String,
    pub tax_amount: String,
    pub tax_rate_percent: u32,
    pub final_income: String,
}

impl TaxFigures {
    /// Formats an assessment for display, amounts at two decimal places.
    pub fn new(total_income: Decimal, assessment: &TaxAssessment) -> Self {
        Self {
            total_income: format_amount(total_income),
            tax_amount: format_amount(assessment.tax),
            tax_rate_percent: assessment.rate_percent,
            final_income: format_amount(total_income - assessment.tax),
        }
    }
}

/// Everything the calculator page needs to render.
#[derive(Debug, Clone, Default)]
pub struct IndexView {
    pub figures: Option<TaxFigures>,
    pub errors: Vec<String>,
    pub income1: String,
    pub income2: String,
}

impl IndexView {
    /// The initial page, with no submission yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Re-renders the form with validation errors and the submitted values.
    pub fn with_errors(errors: Vec<String>, income1: String, income2: String) -> Self {
        Self {
            figures: None,
            errors,
            income1,
            income2,
        }
    }

    /// Renders the results block along with the submitted values.
    pub fn with_figures(figures: TaxFigures, income1: String, income2: String) -> Self {
        Self {
            figures: Some(figures),
            errors: Vec::new(),
            income1,
            income2,
        }
    }
}

/// Renders the full calculator page.
pub fn render_index(view: &IndexView) -> String {
    let errors_block = if view.errors.is_empty() {
        String::new()
    } else {
        let items: String = view
            .errors
            .iter()
            .map(|error| format!("<li>{}</li>", escape_html(error)))
            .collect();
        format!(r#"<ul class="errors">{items}</ul>"#)
    };

    let results_block = match &view.figures {
        Some(figures) => format!(
            r#"<div class="results">
            <p>Total Income: ${total_income}</p>
            <p>Tax Amount: ${tax_amount}</p>
            <p>Tax Rate: {tax_rate_percent}%</p>
            <p class="final">Final Income (After Tax): ${final_income}</p>
        </div>"#,
            total_income = escape_html(&figures.total_income),
            tax_amount = escape_html(&figures.tax_amount),
            tax_rate_percent = figures.tax_rate_percent,
            final_income = escape_html(&figures.final_income),
        ),
        None => String::new(),
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Income Tax Calculator</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        <h1>Income Tax Calculator</h1>
        {errors_block}
        {results_block}
        <form action="/calculate" method="POST">
            <label for="income1">Income Source 1</label>
            <input type="text" id="income1" name="income1" value="{income1}">
            <label for="income2">Income Source 2</label>
            <input type="text" id="income2" name="income2" value="{income2}">
            <button type="submit">Calculate Tax</button>
        </form>
    </div>
</body>
</html>
"##,
        css = CSS,
        errors_block = errors_block,
        results_block = results_block,
        income1 = escape_html(&view.income1),
        income2 = escape_html(&view.income2),
    )
}

/// Escapes text for safe interpolation into HTML.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
