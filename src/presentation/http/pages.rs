//! Server-rendered admin pages. The management page is static; it talks to
//! the JSON API from the browser.

pub fn login_page(error: Option<&str>) -> String {
    let error_html = error
        .map(|msg| {
            format!(
                r#"<p class="error">{}</p>"#,
                htmlescape::encode_minimal(msg)
            )
        })
        .unwrap_or_default();
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Admin login</title>
<style>{STYLE}</style>
</head>
<body>
<main class="narrow">
<h1>Admin login</h1>
{error_html}
<form method="post" action="/admin/login">
<label>Username <input name="username" autocomplete="username" required></label>
<label>Password <input name="password" type="password" autocomplete="current-password" required></label>
<button type="submit">Sign in</button>
</form>
</main>
</body>
</html>
"#
    )
}

pub fn admin_page(username: &str) -> String {
    let user = htmlescape::encode_minimal(username);
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Portal admin</title>
<style>{STYLE}</style>
</head>
<body>
<header><h1>Portal admin</h1><span>{user} &middot; <a href="/admin/logout">Log out</a></span></header>
<main>
<section>
<h2>Events</h2>
<form id="event-form" enctype="multipart/form-data">
<input name="title" placeholder="Title" required>
<input name="date" type="date" required>
<input name="category" placeholder="Category">
<textarea name="description" placeholder="Description"></textarea>
<input name="image" type="file" accept=".png,.jpg,.jpeg,.gif,.webp">
<button type="submit">Add event</button>
</form>
<ul id="events"></ul>
</section>
<section>
<h2>Faculty</h2>
<form id="faculty-form" enctype="multipart/form-data">
<input name="name" placeholder="Name" required>
<input name="designation" placeholder="Designation" required>
<input name="department" placeholder="Department">
<input name="email" type="email" placeholder="Email">
<input name="phone" placeholder="Phone">
<input name="specialization" placeholder="Specialization">
<input name="image" type="file" accept=".png,.jpg,.jpeg,.gif,.webp">
<button type="submit">Add faculty</button>
</form>
<ul id="faculty"></ul>
</section>
</main>
<script>{SCRIPT}</script>
</body>
</html>
"#
    )
}

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0;color:#1f2328}\
header{display:flex;justify-content:space-between;align-items:center;padding:0 2rem;background:#f6f8fa}\
main{padding:1rem 2rem;display:grid;gap:2rem}\
main.narrow{max-width:22rem;margin:4rem auto}\
form{display:grid;gap:.5rem;max-width:32rem}\
.error{color:#cf222e}\
li{margin:.25rem 0}";

const SCRIPT: &str = r#"
const api = (path, opts) => fetch('/api' + path, opts).then(async r => {
  const body = await r.json();
  if (!r.ok) throw new Error(body.error || r.statusText);
  return body;
});
function render(kind, items, label) {
  const list = document.getElementById(kind);
  list.replaceChildren(...items.map(item => {
    const li = document.createElement('li');
    li.textContent = label(item) + ' ';
    const del = document.createElement('button');
    del.textContent = 'Delete';
    del.onclick = () => api('/' + kind + '/' + item.id, {method: 'DELETE'}).then(load).catch(e => alert(e.message));
    li.append(del);
    return li;
  }));
}
function load() {
  api('/events').then(xs => render('events', xs, e => e.date + ' ' + e.title));
  api('/faculty').then(xs => render('faculty', xs, f => f.name + ', ' + f.designation));
}
for (const [form, kind] of [['event-form', 'events'], ['faculty-form', 'faculty']]) {
  document.getElementById(form).addEventListener('submit', ev => {
    ev.preventDefault();
    api('/' + kind, {method: 'POST', body: new FormData(ev.target)})
      .then(() => { ev.target.reset(); load(); })
      .catch(e => alert(e.message));
  });
}
load();
"#;
