use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

const EXPRESS_APP: &str = r#"const express = require('express');
const mongoose = require('mongoose');
const AWS = require('aws-sdk');
const sgMail = require('@sendgrid/mail');

const app = express();

// Connect to MongoDB
mongoose.connect(process.env.DB_URL, { useNewUrlParser: true, useUnifiedTopology: true });

// Configure AWS
AWS.config.update({
  accessKeyId: process.env.AWS_ACCESS_KEY_ID,
  secretAccessKey: process.env.AWS_ACCESS_KEY_SECRET,
  region: 'us-west-2'
});

// Configure SendGrid
sgMail.setApiKey(process.env.SENDGRID_API_KEY);

app.listen(3000, () => {
  console.log('Server is running on port 3000');
});
"#;

#[test]
fn test_single_file_template() -> Result<()> {
    let test = CliTest::with_file("test_dir/main.js", EXPRESS_APP)?;

    let output = test.command().output()?;
    assert!(output.status.success());

    assert_snapshot!(test.read_file(".env.example")?, @r"
    DB_URL=
    AWS_ACCESS_KEY_ID=
    AWS_ACCESS_KEY_SECRET=
    SENDGRID_API_KEY=
    ");

    Ok(())
}

#[test]
fn test_two_files_end_to_end() -> Result<()> {
    let test = CliTest::with_file("a.js", "const u = process.env.DB_URL;\n")?;
    test.write_file(
        "b.js",
        "const k = process.env.API_KEY; const s = process.env.API_SECRET;\n",
    )?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(0));

    assert_eq!(
        test.template_lines_sorted(".env.example")?,
        vec!["API_KEY=", "API_SECRET=", "DB_URL="]
    );

    let content = test.read_file(".env.example")?;
    assert!(content.contains("API_KEY=\nAPI_SECRET=\n"));

    Ok(())
}

#[test]
fn test_duplicates_are_kept() -> Result<()> {
    let test = CliTest::with_file(
        "config.js",
        "module.exports = {\n  port: process.env.PORT,\n  fallback: process.env.PORT || 3000,\n};\n",
    )?;

    test.command().output()?;

    assert_eq!(test.read_file(".env.example")?, "PORT=\nPORT=\n");

    Ok(())
}

#[test]
fn test_only_excluded_content_gives_empty_template() -> Result<()> {
    let test = CliTest::with_file("node_modules/dotenv/lib/main.js", "process.env.DOTENV_KEY")?;
    test.write_file(".env", "LOCAL=process.env.LOCAL")?;

    let output = test.command().output()?;
    assert!(output.status.success());

    assert_eq!(test.read_file(".env.example")?, "");

    Ok(())
}

#[test]
fn test_rerun_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("src/server.ts", "listen(process.env.PORT);\n")?;

    test.command().output()?;
    let first = test.read_file(".env.example")?;
    test.command().output()?;
    let second = test.read_file(".env.example")?;

    assert_eq!(first, "PORT=\n");
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_existing_template_is_overwritten() -> Result<()> {
    let test = CliTest::with_file("index.js", "process.env.NEW_ONE")?;
    test.write_file(".env.example", "OLD=\nOLDER=\n")?;

    test.command().output()?;

    assert_eq!(test.read_file(".env.example")?, "NEW_ONE=\n");

    Ok(())
}

#[test]
fn test_progress_output() -> Result<()> {
    let test = CliTest::with_file("app.js", "process.env.TOKEN")?;
    test.write_file("node_modules/x/index.js", "process.env.HIDDEN")?;

    let output = test.command().output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("Skipping dir: ./node_modules\n"));
    assert!(stdout.contains("Reading file: ./app.js\n"));
    assert!(stdout.contains("Finished walking .\n"));
    assert!(stdout.contains("  TOKEN\n"));
    assert!(stdout.contains("Created ./.env.example with 1 entry from 1 scanned file"));
    assert!(!stdout.contains("HIDDEN"));

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_partial_failure() -> Result<()> {
    use std::os::unix::fs::symlink;

    let test = CliTest::with_file("ok.js", "process.env.KEPT")?;
    symlink(test.root().join("missing.js"), test.root().join("broken.js"))?;

    let output = test.command().output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("warning: cannot read ./broken.js"));
    assert!(stderr.contains("1 path(s) could not be scanned"));
    assert_eq!(test.read_file(".env.example")?, "KEPT=\n");

    Ok(())
}
