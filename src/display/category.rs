//! Category display formatting

use crate::models::TransactionType;

/// Format the allowed categories for each transaction type as a tree
pub fn format_category_tree() -> String {
    let mut output = String::new();

    for (i, kind) in TransactionType::all().iter().enumerate() {
        output.push_str(&format!("{}\n", kind));

        let categories = kind.categories();
        for (j, category) in categories.iter().enumerate() {
            let prefix = if j == categories.len() - 1 {
                "└── "
            } else {
                "├── "
            };
            output.push_str(&format!("  {}{}\n", prefix, category));
        }

        if i < TransactionType::all().len() - 1 {
            output.push('\n');
        }
    }

    output
}
