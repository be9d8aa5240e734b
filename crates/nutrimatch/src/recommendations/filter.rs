use super::domain::Diet;
use super::scoring::ScoredItem;

/// Zero out every item whose compatible diets exclude `diet`.
///
/// Runs after scoring and before ranking. Excluded items keep their components for
/// audits but their score is exactly `0.0`, so the ranker always drops them.
pub fn filter_by_diet(mut scored: Vec<ScoredItem<'_>>, diet: Option<Diet>) -> Vec<ScoredItem<'_>> {
    let Some(diet) = diet else {
        return scored;
    };

    for entry in &mut scored {
        if !entry.item.is_compatible_with(diet) {
            entry.score = 0.0;
            entry.excluded_by_diet = true;
        }
    }

    scored
}
