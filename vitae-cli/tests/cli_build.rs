use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const CONFIG: &str = r#"
site:
  title: "Rita Roe"
  given_name: "Rita"
  sur_name: "Roe"
  description: "Personal academic site"
  url: "https://example.com"
paths:
  bibliography: "publications.bib"
  output: "docs"
  metadata: "publications_meta.json"
  cv: "cv/cv.json"
pages:
  - slug: research
    title: Research
    body: "Research interests go here."
"#;

const BIB: &str = r#"
@inproceedings{roe2023paper,
  author = {Roe, Rita and Doe, John},
  title = {A Conference Paper},
  booktitle = {ICML},
  volume = {2},
  pages = {1-9},
  year = {2023},
}

@mastersthesis{roe2019thesis,
  author = {Roe, Rita},
  title = {A Thesis},
  school = {MIT},
  year = {2019},
}
"#;

const META: &str = r#"{
  "roe2023paper": {
    "abstract": "We study things.",
    "paper_url": "https://example.com/paper.pdf",
    "equal_contribution": [0, 1]
  }
}"#;

const CV: &str = r#"{
  "given-name": "Rita",
  "sur-name": "Roe",
  "summary": "Researcher.",
  "bibliography": {
    "conference-papers": ["roe2023paper", "missing-key"],
    "theses": ["roe2019thesis"]
  },
  "skills": ["Rust", "LaTeX"]
}"#;

fn scaffold(dir: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    fs::write(dir.join("vitae.yml"), CONFIG)?;
    fs::write(dir.join("publications.bib"), BIB)?;
    fs::write(dir.join("publications_meta.json"), META)?;
    fs::create_dir_all(dir.join("cv"))?;
    fs::write(dir.join("cv/cv.json"), CV)?;
    Ok(())
}

#[test]
fn build_renders_all_pages() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    scaffold(dir.path())?;

    #[allow(deprecated)]
    Command::cargo_bin("vitae")?
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .success();

    let docs = dir.path().join("docs");
    for page in ["index.html", "publications.html", "cv.html", "research.html"] {
        assert!(docs.join(page).exists(), "missing {}", page);
    }

    // Default stylesheet extracted since no static/ dir is configured
    assert!(docs.join("static/style.css").exists());

    let pubs = fs::read_to_string(docs.join("publications.html"))?;
    assert!(pubs.contains("<span class=\"highlight\">Rita Roe</span>"));
    assert!(pubs.contains("equal-contrib"));
    assert!(pubs.contains("denotes equal contribution"));
    assert!(pubs.contains("ICML, vol. 2, pp. 1-9"));
    assert!(pubs.contains("https://example.com/paper.pdf"));

    // Year-descending ordering: the 2023 paper before the 2019 thesis
    let paper_pos = pubs.find("A Conference Paper").unwrap();
    let thesis_pos = pubs.find("A Thesis").unwrap();
    assert!(paper_pos < thesis_pos);

    let cv = fs::read_to_string(docs.join("cv.html"))?;
    assert!(cv.contains("<h2>Summary</h2>"));
    assert!(cv.contains("<h3>Conference Papers</h3>"));
    assert!(cv.contains("Master&#x27;s Thesis, MIT") || cv.contains("Master's Thesis, MIT"));
    assert!(cv.contains("Rust · LaTeX"));
    // The unresolved citation key is skipped, not rendered
    assert!(!cv.contains("missing-key"));

    Ok(())
}

#[test]
fn build_without_sources_uses_placeholders() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    // Config only; bibliography and CV files are absent
    fs::write(dir.path().join("vitae.yml"), CONFIG)?;

    #[allow(deprecated)]
    Command::cargo_bin("vitae")?
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .success();

    let docs = dir.path().join("docs");
    let pubs = fs::read_to_string(docs.join("publications.html"))?;
    assert!(pubs.contains("No publications yet."));

    let cv = fs::read_to_string(docs.join("cv.html"))?;
    assert!(cv.contains("CV data not found."));

    Ok(())
}

#[test]
fn publications_json_lists_entries() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    scaffold(dir.path())?;

    #[allow(deprecated)]
    let assert = Command::cargo_bin("vitae")?
        .current_dir(dir.path())
        .args(["publications", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: Value = serde_json::from_str(&stdout)?;
    let arr = value.as_array().expect("json array");
    assert_eq!(arr.len(), 2);

    // Sorted year-descending
    assert_eq!(arr[0]["key"], "roe2023paper");
    assert_eq!(arr[0]["venue"], "ICML, vol. 2, pp. 1-9");
    assert_eq!(arr[0]["paper_url"], "https://example.com/paper.pdf");
    assert_eq!(arr[1]["key"], "roe2019thesis");
    assert_eq!(arr[1]["venue"], "Master's Thesis, MIT");

    Ok(())
}

#[test]
fn init_scaffolds_project() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    #[allow(deprecated)]
    Command::cargo_bin("vitae")?
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("vitae initialized"));

    assert!(dir.path().join("vitae.yml").exists());
    assert!(dir.path().join("publications.bib").exists());
    assert!(dir.path().join("cv/cv.json").exists());

    Ok(())
}
