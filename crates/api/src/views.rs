//! HTML views for the enrollment pages.
//!
//! Pages are assembled from static markup plus escaped values; nothing here
//! touches request state or storage, so equal input gives equal output.

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;background:#f4f6fa;margin:0;color:#1f2933}\
main{max-width:760px;margin:2rem auto;background:#fff;padding:2rem;border-radius:8px;\
box-shadow:0 1px 4px rgba(0,0,0,.08)}\
fieldset{border:1px solid #d9dee7;border-radius:6px;margin-bottom:1.25rem}\
legend{font-weight:600;padding:0 .4rem}\
.form-group{display:flex;flex-direction:column;margin:.5rem 0}\
.form-group input,.form-group select{padding:.45rem;border:1px solid #c3cad6;border-radius:4px}\
.radio-group{display:flex;gap:1rem;margin:.5rem 0}\
.hidden{display:none}\
button{background:#1d4ed8;color:#fff;border:0;padding:.7rem 1.5rem;border-radius:4px;cursor:pointer}\
.outcome{text-align:center}\
@keyframes shake{0%,100%{transform:translateX(0)}25%{transform:translateX(-4px)}75%{transform:translateX(4px)}}";

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n<main>\n{body}\n</main>\n</body>\n\
         </html>\n",
        title = escape_html(title),
    )
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

fn text_input(name: &str, label: &str, kind: &str, required: bool) -> String {
    let required_attr = if required { " required" } else { "" };
    format!(
        "<div class=\"form-group\"><label for=\"{id}\">{label}</label>\
         <input type=\"{kind}\" id=\"{id}\" name=\"{name}\"{required_attr}></div>\n",
        id = name.replace('_', "-"),
    )
}

fn radio_group(name: &str, label: &str, options: &[&str], required: bool) -> String {
    let required_attr = if required { " required" } else { "" };
    let mut html = format!("<div class=\"radio-group\"><span>{label}</span>");
    for option in options {
        html.push_str(&format!(
            "<label><input type=\"radio\" name=\"{name}\" value=\"{option}\"{required_attr}> \
             {option}</label>"
        ));
    }
    html.push_str("</div>\n");
    html
}

fn select(name: &str, label: &str, options: &[&str], required: bool) -> String {
    let required_attr = if required { " required" } else { "" };
    let mut html = format!(
        "<div class=\"form-group\"><label for=\"{id}\">{label}</label>\
         <select id=\"{id}\" name=\"{name}\"{required_attr}><option value=\"\">Select</option>",
        id = name.replace('_', "-"),
    );
    for option in options {
        html.push_str(&format!("<option value=\"{option}\">{option}</option>"));
    }
    html.push_str("</select></div>\n");
    html
}

fn fieldset(legend: &str, content: &str) -> String {
    format!("<fieldset><legend>{legend}</legend>\n{content}</fieldset>\n")
}

/// The enrollment form. Posts to `/submit`.
pub fn enrollment_form() -> String {
    let student = [
        radio_group("student_type", "Student type", &["New", "Transferee"], true),
        "<div id=\"previous-school-field\" class=\"hidden\">".to_string(),
        text_input("previous_school", "Previous school", "text", false),
        "</div>\n".to_string(),
    ]
    .concat();

    let personal = [
        text_input("first_name", "First name", "text", true),
        text_input("middle_name", "Middle name", "text", false),
        text_input("last_name", "Last name", "text", true),
        text_input("address", "Address", "text", true),
        text_input("date_of_birth", "Date of birth", "date", true),
        text_input("place_of_birth", "Place of birth", "text", true),
        text_input("contact_number", "Contact number", "tel", true),
        radio_group("gender", "Gender", &["Male", "Female"], true),
        text_input("citizenship", "Citizenship", "text", true),
        select("status", "Civil status", &["Single", "Married", "Widowed"], true),
    ]
    .concat();

    let family = [
        text_input("father_name", "Father's name", "text", false),
        text_input("father_contact", "Father's contact", "tel", false),
        text_input("father_occupation", "Father's occupation", "text", false),
        text_input("mother_name", "Mother's name", "text", false),
        text_input("mother_contact", "Mother's contact", "tel", false),
        text_input("mother_occupation", "Mother's occupation", "text", false),
    ]
    .concat();

    let education = [
        text_input("elementary_school", "Elementary school", "text", false),
        text_input("elementary_year", "Year graduated", "text", false),
        text_input("junior_high_school", "Junior high school", "text", false),
        text_input("junior_high_year", "Year graduated", "text", false),
        text_input("senior_high_school", "Senior high school", "text", false),
        text_input("senior_high_year", "Year graduated", "text", false),
    ]
    .concat();

    let enrollment = [
        select("course", "Course", &["BSIT", "BSCS", "BSBA", "BSED", "BSN"], true),
        text_input("academic_year", "Academic year", "text", false),
        select("semester", "Semester", &["1st", "2nd", "Summer"], false),
        text_input("signature", "Signature (full name)", "text", false),
        text_input("gcash_number", "GCash number", "tel", false),
    ]
    .concat();

    let body = format!(
        "<h1>Online Enrollment</h1>\n\
         <form id=\"enrollment-form\" method=\"post\" action=\"/submit\">\n\
         {}{}{}{}{}\
         <button type=\"submit\">Submit enrollment</button>\n\
         </form>\n\
         <script src=\"/static/script.js\"></script>",
        fieldset("Student information", &student),
        fieldset("Personal information", &personal),
        fieldset("Family background", &family),
        fieldset("Educational background", &education),
        fieldset("Enrollment details", &enrollment),
    );

    page("Online Enrollment", &body)
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Confirmation page. The identifier is shown exactly as received.
pub fn success_page(student_id: &str) -> String {
    let body = format!(
        "<div class=\"outcome\">\n\
         <h1>Enrollment submitted</h1>\n\
         <p>Your enrollment reference number is <strong>{}</strong>.</p>\n\
         <p><a href=\"/\">Submit another enrollment</a></p>\n\
         </div>",
        escape_html(student_id),
    );
    page("Enrollment submitted", &body)
}

/// Error page showing `message`.
pub fn error_page(message: &str) -> String {
    let body = format!(
        "<div class=\"outcome\">\n\
         <h1>Something went wrong</h1>\n\
         <p class=\"message\">{}</p>\n\
         <p><a href=\"/\">Back to the enrollment form</a></p>\n\
         </div>",
        escape_html(message),
    );
    page("Enrollment error", &body)
}
