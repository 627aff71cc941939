use super::{from_fn, layout, Escaped};
use crate::models::associate::Associate;
use crate::models::department::{Department, DepartmentGroups};
use std::fmt;

const HOME_STYLE: &str = r#"
body { text-align: center; margin-top: 50px; }
h1 { text-align: center; }
.form-container input[type=number], .form-container input[type=text] { padding: 10px; margin: 5px; }
"#;

const LOOKUP_STYLE: &str = r#"
body { text-align: center; margin-top: 50px; }
.info-container { display: inline-block; text-align: left; margin-top: 20px; padding: 20px; background-color: #ffffff; border: 1px solid #ddd; border-radius: 10px; }
.info-container h2 { color: #0404F5; }
"#;

const LISTING_STYLE: &str = r#"
.container { display: flex; flex-wrap: wrap; justify-content: space-between; }
.top-container { display: flex; justify-content: space-between; width: 100%; margin-bottom: 20px; }
.table-container { width: 45%; }
.bottom-container { width: 100%; margin-top: 20px; text-align: center; }
table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }
th, td { border: 1px solid black; padding: 8px; text-align: left; }
th { background-color: lightgrey; }
"#;

/// Landing page with the lookup form.
pub struct HomePage;

impl fmt::Display for HomePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = from_fn(|f| {
            f.write_str(
                r#"<h1>Welcome to the Associates Information System</h1>
<div class="link-container">
    <a href="/associates" class="button">View Associates</a>
</div>
<div class="form-container">
    <form action="/lookup_associate" method="post">
        <input type="number" name="id" placeholder="Enter Associate ID">
        <input type="text" name="name" placeholder="Enter Name">
        <input type="text" name="manager" placeholder="Enter Manager">
        <input type="text" name="department" placeholder="Enter Department">
        <input type="submit" value="Look Up">
    </form>
</div>
"#,
            )
        });
        layout(f, "Home Page", HOME_STYLE, body)
    }
}

/// Result of a filtered lookup: one card per match, or a "none found" notice.
pub struct LookupResultsPage<'a> {
    pub associates: &'a [Associate],
}

impl fmt::Display for LookupResultsPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = from_fn(|f| {
            if self.associates.is_empty() {
                f.write_str("<h2>No associate found with the provided criteria</h2>\n")?;
            }
            for associate in self.associates {
                write!(
                    f,
                    r#"<div class="info-container">
    <h2>Associate Information</h2>
    <p><strong>ID:</strong> {}</p>
    <p><strong>Name:</strong> {}</p>
    <p><strong>Hire Date:</strong> {}</p>
    <p><strong>Manager:</strong> {}</p>
    <p><strong>Department:</strong> {}</p>
</div>
"#,
                    associate.id,
                    Escaped(&associate.name),
                    associate.hire_date,
                    Escaped(&associate.manager),
                    Escaped(&associate.department),
                )?;
            }
            f.write_str("<a href=\"/\" class=\"button\">Back to Home</a>\n")
        });
        layout(f, "Associate Information", LOOKUP_STYLE, body)
    }
}

/// Full listing grouped by department, followed by the add, delete and edit forms.
pub struct ListingPage<'a> {
    pub groups: &'a DepartmentGroups,
}

impl ListingPage<'_> {
    fn department_table(&self, f: &mut fmt::Formatter<'_>, department: Department) -> fmt::Result {
        write!(
            f,
            "<h2>{} Department</h2>\n<table>\n<thead>\n\
             <tr><th>ID</th><th>Name</th><th>Hire Date</th><th>Manager</th></tr>\n\
             </thead>\n<tbody>\n",
            department.label()
        )?;
        for associate in self.groups.bucket(department) {
            write!(
                f,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                associate.id,
                Escaped(&associate.name),
                associate.hire_date,
                Escaped(&associate.manager),
            )?;
        }
        f.write_str("</tbody>\n</table>\n")
    }
}

const LISTING_FORMS: &str = r#"<div class="form-container">
    <h2>Add Associate</h2>
    <form action="/associates" method="post">
        <input type="text" name="name" placeholder="Enter Name" required>
        <input type="date" name="hire_date" placeholder="Enter Hire Date" required>
        <input type="text" name="manager" placeholder="Enter Manager" required>
        <input type="text" name="department" placeholder="Enter Department" required>
        <input type="submit" value="Add Associate">
    </form>
</div>
<div class="form-container">
    <h2>Delete Associate</h2>
    <form action="/delete_associate" method="post">
        <input type="number" name="id" placeholder="Enter Associate ID" required>
        <input type="submit" value="Delete Associate">
    </form>
</div>
<div class="form-container">
    <h2>Edit Associate</h2>
    <form action="/edit_associate" method="post">
        <input type="number" name="id" placeholder="Enter Associate ID" required>
        <input type="text" name="name" placeholder="Enter New Name">
        <input type="date" name="hire_date" placeholder="Enter New Hire Date">
        <input type="text" name="manager" placeholder="Enter New Manager">
        <input type="text" name="department" placeholder="Enter New Department">
        <input type="submit" value="Edit Associate">
    </form>
</div>
"#;

impl fmt::Display for ListingPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = from_fn(|f| {
            f.write_str("<h1>Associates Information</h1>\n")?;
            f.write_str("<div class=\"container\">\n<div class=\"top-container\">\n")?;
            f.write_str("<div class=\"table-container\">\n")?;
            self.department_table(f, Department::It)?;
            f.write_str("</div>\n<div class=\"table-container\">\n")?;
            self.department_table(f, Department::Marketing)?;
            f.write_str("</div>\n</div>\n<div class=\"bottom-container\">\n")?;
            self.department_table(f, Department::Engineering)?;
            f.write_str("<a href=\"/\" class=\"button\">Back to Home</a>\n</div>\n</div>\n")?;
            f.write_str(LISTING_FORMS)
        });
        layout(f, "Associates Information", LISTING_STYLE, body)
    }
}
