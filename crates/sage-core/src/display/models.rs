//! Display implementations for domain models.
//!
//! Markdown-formatted output for rich terminal display, separated from the
//! model definitions to keep data and presentation apart.

use std::fmt;

use crate::models::{DateDetail, DayPlan, MaterialRef, StudyPlan, StudyTask, YesterdayReview};

impl fmt::Display for StudyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.plan_name)?;
        writeln!(f)?;
        writeln!(f, "- Duration: {}", self.total_duration)?;
        writeln!(f, "- Days scheduled: {}", self.daily_schedule.len())?;

        if self.daily_schedule.is_empty() {
            writeln!(f, "\nNo days scheduled in this plan.")?;
        } else {
            writeln!(f)?;
            for day in &self.daily_schedule {
                write!(f, "{day}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.date)?;
        writeln!(f)?;
        for task in &self.tasks {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

impl fmt::Display for StudyTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let checkbox = if self.completed { "[x]" } else { "[ ]" };
        writeln!(f, "- {} **{}** ({})", checkbox, self.title, self.duration)?;
        if !self.description.is_empty() {
            writeln!(f, "  {}", self.description)?;
        }
        for material in &self.related_materials {
            writeln!(f, "  - {material}")?;
        }
        Ok(())
    }
}

impl fmt::Display for MaterialRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({}) ({})", self.title, self.url, self.kind)?;
        if let Some(desc) = &self.description {
            write!(f, ": {desc}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DateDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.plan_name {
            writeln!(f, "# {} ({})", self.date, name)?;
        } else {
            writeln!(f, "# {}", self.date)?;
        }
        writeln!(f)?;

        if let Some(message) = &self.message {
            writeln!(f, "{message}")?;
            return Ok(());
        }

        for task in &self.tasks {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

impl fmt::Display for YesterdayReview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_review {
            writeln!(f, "Nothing to review from yesterday.")?;
            return Ok(());
        }

        writeln!(f, "# Review: {}", self.yesterday_topic)?;
        writeln!(f)?;
        for material in &self.materials {
            writeln!(f, "- {material}")?;
        }
        Ok(())
    }
}
