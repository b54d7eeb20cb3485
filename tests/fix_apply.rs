use std::{
	fs,
	path::PathBuf,
	process::Command,
	time::{SystemTime, UNIX_EPOCH},
};

const SOURCE: &str = "import { a, b, c } from \"x\";\n";
const DUMP: &str = r#"{
	"path": "app.js",
	"text": "import { a, b, c } from \"x\";\n",
	"declarations": [
		{
			"span": {
				"start": {"line": 1, "column": 0, "offset": 0},
				"end": {"line": 1, "column": 28, "offset": 28}
			},
			"sourceRaw": "\"x\"",
			"specifiers": [
				{
					"kind": "named",
					"local": "a",
					"imported": "a",
					"span": {
						"start": {"line": 1, "column": 9, "offset": 9},
						"end": {"line": 1, "column": 10, "offset": 10}
					}
				},
				{
					"kind": "named",
					"local": "b",
					"imported": "b",
					"span": {
						"start": {"line": 1, "column": 12, "offset": 12},
						"end": {"line": 1, "column": 13, "offset": 13}
					}
				},
				{
					"kind": "named",
					"local": "c",
					"imported": "c",
					"span": {
						"start": {"line": 1, "column": 15, "offset": 15},
						"end": {"line": 1, "column": 16, "offset": 16}
					}
				}
			]
		}
	]
}"#;

fn create_temp_workspace(tag: &str) -> PathBuf {
	let stamp = SystemTime::now().duration_since(UNIX_EPOCH).expect("clock").as_nanos();
	let root = std::env::temp_dir().join(format!("import-newlines-{tag}-{stamp}"));
	let _ = fs::remove_dir_all(&root);

	fs::create_dir_all(&root).expect("create workspace");
	fs::write(root.join("app.js"), SOURCE).expect("write source");
	fs::write(root.join("dump.json"), DUMP).expect("write dump");

	root
}

#[test]
fn fix_rewrites_the_dumped_source() {
	let temp_dir = create_temp_workspace("fix");

	fs::write(temp_dir.join("policy.json"), r#"{"items": 2}"#).expect("write policy");

	let output = Command::new(env!("CARGO_BIN_EXE_import-newlines"))
		.current_dir(&temp_dir)
		.args(["fix", "dump.json", "-c", "policy.json"])
		.output()
		.expect("run fix");

	assert!(output.status.success(), "all violations should be fixed");

	let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");

	assert!(stdout.contains("Applied 1 fix(es)."));
	assert_eq!(
		fs::read_to_string(temp_dir.join("app.js")).expect("read source"),
		"import {\na,\nb,\nc\n} from \"x\";\n"
	);
}

#[test]
fn fix_leaves_compliant_sources_untouched() {
	let temp_dir = create_temp_workspace("fix-noop");
	let output = Command::new(env!("CARGO_BIN_EXE_import-newlines"))
		.current_dir(&temp_dir)
		.args(["fix", "dump.json"])
		.output()
		.expect("run fix");

	assert!(output.status.success());

	let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");

	assert!(stdout.contains("Applied 0 fix(es)."));
	assert_eq!(fs::read_to_string(temp_dir.join("app.js")).expect("read source"), SOURCE);
}

#[test]
fn legacy_positional_policy_drives_the_fix() {
	let temp_dir = create_temp_workspace("fix-positional");

	fs::write(temp_dir.join("policy.json"), "[2]").expect("write policy");

	let output = Command::new(env!("CARGO_BIN_EXE_import-newlines"))
		.current_dir(&temp_dir)
		.args(["fix", "dump.json", "-c", "policy.json"])
		.output()
		.expect("run fix");

	assert!(output.status.success());
	assert_eq!(
		fs::read_to_string(temp_dir.join("app.js")).expect("read source"),
		"import {\na,\nb,\nc\n} from \"x\";\n"
	);
}
