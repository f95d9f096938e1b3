use contracts::domain::a005_job::{Job, JobDto, JobStatus, JobType};
use contracts::domain::common::{Choice, RecordId};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::option_select::{choice_options, OptionSelect};
use crate::shared::config::use_config;
use crate::shared::data::store::use_store;
use crate::shared::modal::Modal;

/// Add/edit dialog for a job posting; `job = None` creates one.
#[component]
pub fn JobForm(job: Option<Job>, on_close: Callback<()>) -> impl IntoView {
    let store = use_store();
    let config = use_config();
    let id = job.as_ref().map(|j| j.id);
    let dto = job.as_ref().map(JobDto::from_job).unwrap_or_default();
    let title_text = match &job {
        Some(j) => format!("Edit {}", j.title),
        None => "Post a Job".to_string(),
    };

    let title = RwSignal::new(dto.title);
    let department = RwSignal::new(dto.department);
    let location = RwSignal::new(dto.location);
    let job_type = RwSignal::new(dto.job_type.code().to_string());
    let experience = RwSignal::new(dto.experience);
    let salary = RwSignal::new(dto.salary);
    let description = RwSignal::new(dto.description);
    let status = RwSignal::new(dto.status.code().to_string());
    let error = RwSignal::new(None::<String>);

    let on_save = Callback::new(move |_: ()| {
        let dto = JobDto {
            title: title.get_untracked(),
            department: department.get_untracked(),
            location: location.get_untracked(),
            job_type: JobType::from_code(&job_type.get_untracked()).unwrap_or_default(),
            experience: experience.get_untracked(),
            salary: salary.get_untracked(),
            description: description.get_untracked(),
            status: JobStatus::from_code(&status.get_untracked()).unwrap_or_default(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        let result = match id {
            Some(id) => {
                let mut result = Ok(id);
                store.jobs.update(|jobs| {
                    result = jobs.modify(id, |j| dto.apply_to(j)).map(|_| id);
                });
                result
            }
            None => {
                let mut new_id = RecordId::default();
                store
                    .jobs
                    .update(|jobs| new_id = jobs.insert(dto.into_job(config.today())));
                Ok(new_id)
            }
        };
        match result {
            Ok(saved) => {
                log::info!("job #{saved} saved");
                on_close.run(());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    view! {
        <Modal
            title=title_text
            on_close=on_close
            footer=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(())>
                    "Save"
                </Button>
            }
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="details-grid--2col">
                <div class="form__group">
                    <Label>"Title"</Label>
                    <Input value=title />
                </div>
                <div class="form__group">
                    <Label>"Department"</Label>
                    <Input value=department />
                </div>
                <div class="form__group">
                    <Label>"Location"</Label>
                    <Input value=location />
                </div>
                <div class="form__group">
                    <Label>"Job type"</Label>
                    <OptionSelect value=job_type options={choice_options::<JobType>()} />
                </div>
                <div class="form__group">
                    <Label>"Experience"</Label>
                    <Input value=experience placeholder="e.g. 2+ years" />
                </div>
                <div class="form__group">
                    <Label>"Salary"</Label>
                    <Input value=salary placeholder="e.g. ₹25,000 / month" />
                </div>
                <div class="form__group">
                    <Label>"Status"</Label>
                    <OptionSelect value=status options={choice_options::<JobStatus>()} />
                </div>
            </div>
            <div class="form__group">
                <Label>"Description"</Label>
                <Textarea value=description />
            </div>
        </Modal>
    }
}
