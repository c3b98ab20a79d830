#[cfg(test)]
#[path = "language_test.rs"]
mod tests;

use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    JavaScript,
    Java,
    Cpp,
    Html,
}

impl Language {
    pub fn parse(text: &str) -> Option<Language> {
        return Language::iter().find(|e| return e.to_string() == text.to_lowercase());
    }

    /// Human readable name, used when phrasing the prompt for the model.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Python => return "Python",
            Language::JavaScript => return "JavaScript",
            Language::Java => return "Java",
            Language::Cpp => return "C++",
            Language::Html => return "HTML",
        }
    }

    /// Token handed to syntect to find a highlighting syntax.
    pub fn syntax_token(&self) -> &'static str {
        match self {
            Language::Python => return "py",
            Language::JavaScript => return "js",
            Language::Java => return "java",
            Language::Cpp => return "cpp",
            Language::Html => return "html",
        }
    }

    pub fn download_file_name(&self) -> String {
        return format!("{self}_codemind_code.txt");
    }

    /// Cycles through languages in selector order, wrapping at the end.
    pub fn next(&self) -> Language {
        let languages = Language::iter().collect::<Vec<Language>>();
        let idx = languages.iter().position(|e| return e == self).unwrap_or(0);

        return languages[(idx + 1) % languages.len()];
    }

    /// Example shown whenever the remote service can't supply usable text.
    pub fn fallback_snippet(&self) -> &'static str {
        match self {
            Language::Python => {
                return r#"def factorial(n):
    if n <= 1:
        return 1
    return n * factorial(n - 1)


print(factorial(5))"#;
            }
            Language::JavaScript => {
                return r#"function factorial(n) {
  if (n <= 1) return 1;
  return n * factorial(n - 1);
}

console.log(factorial(5));"#;
            }
            Language::Java => {
                return r#"public class Main {
    static int factorial(int n) {
        if (n <= 1) return 1;
        return n * factorial(n - 1);
    }

    public static void main(String[] args) {
        System.out.println(factorial(5));
    }
}"#;
            }
            Language::Cpp => {
                return r#"#include <iostream>

int factorial(int n) {
    if (n <= 1) return 1;
    return n * factorial(n - 1);
}

int main() {
    std::cout << factorial(5) << std::endl;
    return 0;
}"#;
            }
            Language::Html => {
                return r#"<!DOCTYPE html>
<html>
  <body>
    <p id="result"></p>
    <script>
      function factorial(n) {
        return n <= 1 ? 1 : n * factorial(n - 1);
      }
      document.getElementById("result").textContent = factorial(5);
    </script>
  </body>
</html>"#;
            }
        }
    }
}
