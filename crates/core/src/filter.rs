//! Free-text filtering for list screens

use crate::models::{
    AcademicPeriod, Application, PaymentDetail, ScholarshipType, Student, UserAccount,
};

/// Entity that list screens can filter by free text
pub trait Searchable {
    /// Text fragments the query is matched against
    fn haystack(&self) -> Vec<String>;
}

/// Case-insensitive match of every whitespace-separated term in `query`
/// against any fragment. A blank query matches everything.
pub fn matches<S: Searchable + ?Sized>(item: &S, query: &str) -> bool {
    let fragments: Vec<String> = item.haystack().iter().map(|s| s.to_lowercase()).collect();
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .all(|term| fragments.iter().any(|fragment| fragment.contains(&term)))
}

/// Items of `items` matching `query`, in their original order
pub fn filter<'a, S: Searchable>(items: &'a [S], query: &str) -> Vec<&'a S> {
    items.iter().filter(|item| matches(*item, query)).collect()
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl Searchable for Student {
    fn haystack(&self) -> Vec<String> {
        vec![
            self.national_id.clone(),
            self.full_name(),
            self.email.clone(),
        ]
    }
}

impl Searchable for ScholarshipType {
    fn haystack(&self) -> Vec<String> {
        vec![self.name.clone(), opt(&self.description)]
    }
}

impl Searchable for Application {
    fn haystack(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            opt(&self.student_name),
            opt(&self.scholarship_type_name),
            opt(&self.status_name),
            opt(&self.notes),
        ]
    }
}

impl Searchable for PaymentDetail {
    fn haystack(&self) -> Vec<String> {
        vec![
            self.application_id.to_string(),
            opt(&self.method),
            opt(&self.reference),
        ]
    }
}

impl Searchable for AcademicPeriod {
    fn haystack(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}

impl Searchable for UserAccount {
    fn haystack(&self) -> Vec<String> {
        vec![self.username.clone(), self.name.clone(), opt(&self.email)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(first: &str, last: &str, national_id: &str) -> Student {
        Student {
            first_names: first.into(),
            last_names: last.into(),
            national_id: national_id.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_terms_must_match() {
        let ana = student("Ana María", "Torres", "0912345678");
        assert!(matches(&ana, "ana torres"));
        assert!(matches(&ana, "TORRES 0912"));
        assert!(!matches(&ana, "ana vera"));
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        let students = vec![student("Ana", "Torres", "1"), student("Luis", "Vera", "2")];
        assert_eq!(filter(&students, "  ").len(), 2);
        let hits = filter(&students, "vera");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_names, "Luis");
    }
}
