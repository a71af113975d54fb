use axum::response::Html;

/// GET /
/// Single-page upload form. Talks to the JSON and report endpoints.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>AI Resume Analyzer</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 44rem; margin: 2rem auto; padding: 0 1rem; }
  section { margin-top: 1.5rem; }
  #skills { line-height: 1.6; }
  .hidden { display: none; }
</style>
</head>
<body>
<h1>AI Resume Analyzer</h1>
<form id="upload">
  <label for="file">Upload your resume (PDF/DOCX)</label><br>
  <input id="file" name="file" type="file" accept=".pdf,.docx" required>
</form>

<div id="results" class="hidden">
  <section>
    <h2>Extracted Skills</h2>
    <p id="skills"></p>
  </section>
  <section>
    <h2>Missing Resume Sections</h2>
    <p id="missing"></p>
  </section>
  <button id="download" type="button">Download Report (PDF)</button>
</div>
<p id="error" role="alert"></p>

<script>
const input = document.getElementById("file");
const results = document.getElementById("results");
const error = document.getElementById("error");

function formData() {
  const data = new FormData();
  data.append("file", input.files[0]);
  return data;
}

input.addEventListener("change", async () => {
  results.classList.add("hidden");
  error.textContent = "";
  if (!input.files.length) return;

  const response = await fetch("/api/v1/analyze", { method: "POST", body: formData() });
  const body = await response.json();
  if (!response.ok) {
    error.textContent = body.error ? body.error.message : "Upload failed";
    return;
  }
  if (!body.analysis) return;

  document.getElementById("skills").textContent = body.analysis.skills.join(", ");
  document.getElementById("missing").textContent = body.analysis.missing_sections_display;
  results.classList.remove("hidden");
});

document.getElementById("download").addEventListener("click", async () => {
  const response = await fetch("/api/v1/analyze/report", { method: "POST", body: formData() });
  if (!response.ok) {
    error.textContent = "Report could not be generated";
    return;
  }
  const url = URL.createObjectURL(await response.blob());
  const link = document.createElement("a");
  link.href = url;
  link.download = "resume_analysis.pdf";
  link.click();
  URL.revokeObjectURL(url);
});
</script>
</body>
</html>
"#;
