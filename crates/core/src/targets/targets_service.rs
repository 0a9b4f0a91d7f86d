use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};

use super::targets_calculator::compute;
use super::targets_model::{NewTarget, StoredTarget, TargetInput, Tier, ValidatedTarget};
use super::targets_traits::{TargetRepositoryTrait, TargetServiceTrait};
use super::targets_validation::{validate_date, validate_name, validate_nominal, validate_term};
use crate::errors::{BusinessRuleError, Result, ValidationError};

/// Validates every field of a submission in form order
/// (name, nominal, term, start date), stopping at the first rejection. The
/// tier never rejects a submission.
pub fn validate_target(
    input: &TargetInput,
    today: NaiveDate,
) -> std::result::Result<ValidatedTarget, ValidationError> {
    let name = validate_name(&input.name)?;
    let nominal = validate_nominal(&input.nominal)?;
    let term = validate_term(&input.term)?;
    let start_date = validate_date(&input.start_date, today)?;
    let tier = Tier::from_form(input.tier.as_deref());

    Ok(ValidatedTarget {
        name,
        category: input.category.trim().to_string(),
        nominal,
        term,
        start_date,
        tier,
        insurance: input.insurance,
    })
}

pub struct TargetService {
    target_repo: Arc<dyn TargetRepositoryTrait>,
}

impl TargetService {
    pub fn new(target_repo: Arc<dyn TargetRepositoryTrait>) -> Self {
        TargetService { target_repo }
    }

    fn evaluate(&self, input: &TargetInput, today: NaiveDate) -> Result<NewTarget> {
        let target = validate_target(input, today)?;
        let commitment = compute(
            target.nominal,
            target.term,
            target.tier,
            target.insurance,
            &target.category,
        );

        if commitment.insurance_error {
            return Err(BusinessRuleError::InsuranceUnavailable {
                category: target.category,
            }
            .into());
        }

        debug!(
            "Computed commitment for '{}': installment={} discount={} fee={} total={}",
            target.name,
            commitment.installment,
            commitment.discount,
            commitment.insurance_fee,
            commitment.total
        );
        Ok(NewTarget::new(target, &commitment))
    }
}

#[async_trait]
impl TargetServiceTrait for TargetService {
    fn get_targets(&self) -> Result<Vec<StoredTarget>> {
        self.target_repo.load_targets()
    }

    fn preview_target(&self, input: &TargetInput, today: NaiveDate) -> Result<NewTarget> {
        self.evaluate(input, today)
    }

    async fn create_target(&self, input: TargetInput, today: NaiveDate) -> Result<StoredTarget> {
        let new_target = self.evaluate(&input, today)?;
        let stored = self.target_repo.append_target(new_target).await?;
        info!("Created target {} ({})", stored.id, stored.name);
        Ok(stored)
    }
}
