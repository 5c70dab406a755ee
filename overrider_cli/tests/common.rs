use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn overrider_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("overrider"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd
}

#[allow(dead_code)]
/// Registry for `<div><input type="text" __OVERRIDE_ATTR__e0a1__value=""/></div>`.
pub const INPUT_REGISTRY: &str = r#"{
	"defaults": {},
	"code": {
		"e0a1": {
			"attributes": {
				"value": "value={DS.e(d.e0a1AttrValue) ? d.e0a1AttrValue : 'hi'}"
			}
		}
	}
}"#;

#[allow(dead_code)]
pub const INPUT_MARKUP: &str = r#"<div><input type="text" __OVERRIDE_ATTR__e0a1__value=""/></div>"#;
