// Flag delivery to the external student/professor collaborators.
//
// Both hooks are best-effort, fire-and-forget side effects; the engine does
// not track whether notification succeeded. A handle carrying neither hook
// degrades to a no-op rather than a fault.

use std::sync::Arc;

use tracing::debug;

use crate::submission::Submission;

pub(crate) fn flag(submission: &Arc<Submission>) {
    if let Some(student) = &submission.student {
        student.flag_student(submission);
    }
    if let Some(professor) = &submission.professor {
        professor.flag_professor(submission);
    }
    if submission.student.is_none() && submission.professor.is_none() {
        debug!(id = submission.id, "flagged submission has no collaborators to notify");
    }
}
