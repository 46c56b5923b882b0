//! Plan generation: request, parse, validate, enrich, persist.

use jiff::civil::Date;
use log::{info, warn};
use tokio::task;

use super::Engine;
use crate::{
    db::Database,
    error::{EngineError, Result},
    generator::{extract_json, GeneratorOutcome, RawMaterialsDoc},
    materials::MAX_RELATED,
    models::{MaterialRef, MaterialType, RestDays, StudyPlan, TOTAL_DURATION},
    params::GeneratePlan,
    schedule::{build_fallback_plan, prompt, validate_schedule},
};

impl Engine {
    /// Generate a study plan and append it to the user's plan history.
    ///
    /// Always yields a structurally valid plan: a generator failure or an
    /// unusable response switches to the deterministic fallback builder
    /// instead of surfacing an error. The only caller-visible failures are
    /// invalid input and store errors.
    pub async fn generate_plan(&self, user_id: &str, params: &GeneratePlan) -> Result<StudyPlan> {
        let start_date = parse_start_date(&params.start_date)?;
        let rest_days = RestDays::from_labels(&params.rest_days)?;

        info!("generating plan for '{}' ({})", params.skill, user_id);

        // Request + Parse: one attempt against the generator, classified
        // into a usable schedule or nothing.
        let request = prompt::schedule_prompt(
            &params.skill,
            params.hours_per_day,
            start_date,
            &rest_days,
            &params.self_level,
        );
        let outcome = match self.generator.invoke(&request, false).await {
            Ok(response) => GeneratorOutcome::classify(&response),
            Err(e) => {
                warn!("generator unavailable: {e}");
                GeneratorOutcome::Unusable
            }
        };

        let plan = match outcome {
            GeneratorOutcome::Usable(raw) => {
                // Validate + Enrich. An empty day list after rest-day
                // filtering is accepted as-is; only an unusable response
                // triggers the fallback path.
                let (mut days, slots) =
                    validate_schedule(raw.daily_schedule, &rest_days, &params.skill);
                info!("enriching {} task(s) with materials", slots.len());
                for slot in slots {
                    let materials = self.resolver.resolve(&slot.topic).await;
                    let task = &mut days[slot.day].tasks[slot.task];
                    task.related_materials = materials.related_materials;
                    task.review_materials = materials.review_materials;
                }
                StudyPlan {
                    plan_name: raw
                        .plan_name
                        .unwrap_or_else(|| format!("{} Study Plan", params.skill)),
                    total_duration: TOTAL_DURATION.to_string(),
                    daily_schedule: days,
                }
            }
            GeneratorOutcome::Unusable => {
                info!("generator output unusable, building fallback schedule");
                build_fallback_plan(
                    &params.skill,
                    params.hours_per_day,
                    start_date,
                    &rest_days,
                    &self.resolver,
                )
                .await?
            }
        };

        self.persist_plan(user_id, &plan).await?;
        info!("plan '{}' persisted ({} days)", plan.plan_name, plan.daily_schedule.len());
        Ok(plan)
    }

    /// Look up supplementary materials for a free-form topic.
    ///
    /// Invokes the generator with live search allowed; anything unusable
    /// collapses to a pair of synthesized search links. Never fails.
    pub async fn related_materials(&self, topic: &str) -> Result<Vec<MaterialRef>> {
        let request = prompt::material_prompt(topic);
        let found = match self.generator.invoke(&request, true).await {
            Ok(response) => extract_json(&response)
                .and_then(|v| serde_json::from_value::<RawMaterialsDoc>(v).ok())
                .map(|doc| {
                    doc.materials
                        .into_iter()
                        .filter(MaterialRef::url_is_credible)
                        .take(MAX_RELATED)
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default(),
            Err(e) => {
                warn!("material lookup unavailable: {e}");
                Vec::new()
            }
        };

        if !found.is_empty() {
            return Ok(found);
        }

        // Default search links, one video and one generic web search.
        let query = urlencoding::encode(topic);
        Ok(vec![
            MaterialRef {
                title: format!("{topic} on YouTube"),
                kind: MaterialType::Video,
                url: format!("https://www.youtube.com/results?search_query={query}"),
                description: Some("Search YouTube for the topic".to_string()),
            },
            MaterialRef {
                title: format!("{topic} web search"),
                kind: MaterialType::Other,
                url: format!("https://www.google.com/search?q={query}+course"),
                description: Some("Search the web for courses on the topic".to_string()),
            },
        ])
    }

    /// Persist: exactly one append per generation call, then drop the
    /// user's cache entry so the next read observes the new plan.
    async fn persist_plan(&self, user_id: &str, plan: &StudyPlan) -> Result<()> {
        let db_path = self.db_path.clone();
        let user = user_id.to_string();
        let plan = plan.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.append_plan(&user, &plan)
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        self.cache.invalidate(user_id);
        Ok(())
    }
}

fn parse_start_date(raw: &str) -> Result<Date> {
    // Tolerate a datetime form by taking the date part.
    let date_part = raw.split('T').next().unwrap_or(raw);
    date_part.parse::<Date>().map_err(|_| {
        EngineError::invalid_input(
            "start_date",
            format!("Expected YYYY-MM-DD, got '{raw}'"),
        )
    })
}
