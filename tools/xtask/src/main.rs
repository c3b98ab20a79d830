use std::env;
use std::fs;
use std::io::Write;
use std::process;

fn cmd(args: Vec<&str>) -> String {
    let mut child = process::Command::new("./target/debug/codemind");
    for arg in args {
        child.arg(arg);
    }

    // Keep local settings out of the rendered help text.
    for (key, _) in env::vars() {
        if key.starts_with("CODEMIND_") || key == "HUGGINGFACE_API_KEY" {
            child.env_remove(key);
        }
    }

    return String::from_utf8(child.env("NO_COLOR", "1").output().unwrap().stdout).unwrap();
}

fn replace_section(readme: &mut String, name: &str, body: &str) {
    let start_marker = format!("<!-- {name} start -->");
    let end_marker = format!("<!-- {name} end -->");
    let start = readme.find(&start_marker).unwrap();
    let end = readme.find(&end_marker).unwrap();

    readme.replace_range(start..end, &format!("{start_marker}\n```\n{body}\n```\n"));
}

fn update_readme() {
    let output_help = cmd(vec!["--help"]);
    let output_generate = cmd(vec!["generate", "--help"]);

    let mut readme = fs::read_to_string("./README.md").unwrap();
    replace_section(&mut readme, "command-help", output_help.trim_end());
    replace_section(&mut readme, "command-generate", output_generate.trim_end());

    let mut f = fs::File::create("./README.md").unwrap();
    f.write_all(readme.as_bytes()).unwrap();
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.last().unwrap() == "update-readme" {
        update_readme();
    } else {
        eprintln!("ERROR: No task selected");
        process::exit(1);
    }
}
