use leptos::{either::Either, ev::SubmitEvent, html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{ContactError, ContactForm, Delivery, Field, SuccessTicket};
use crate::content::Profile;
use crate::reveal::reveal_class;

use super::about::SectionHeading;
use super::hooks::use_reveal;

#[component]
pub fn Contact(profile: &'static Profile) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let phase = use_reveal(section_ref);

    view! {
        <section
            id="contact"
            node_ref=section_ref
            class=move || {
                format!(
                    "py-20 bg-white dark:bg-gray-800 transition-opacity duration-1000 {}",
                    reveal_class(phase.get()),
                )
            }
        >
            <div class="container mx-auto px-4">
                <SectionHeading title="Get In Touch" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-10 max-w-6xl mx-auto">
                    <ContactInfo profile />
                    <MessageForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo(profile: &'static Profile) -> impl IntoView {
    let items = [
        ("✉", "Email", format!("mailto:{}", profile.email), profile.email.clone(), false),
        ("☎", "Phone", format!("tel:{}", profile.phone), profile.phone_display.clone(), false),
        ("in", "LinkedIn", profile.linkedin.url.clone(), profile.linkedin.label.clone(), true),
        ("⌥", "GitHub", profile.github.url.clone(), profile.github.label.clone(), true),
    ];

    view! {
        <div class="space-y-8">
            <div class="bg-gray-50 dark:bg-gray-700 p-6 rounded-lg shadow-md">
                <h3 class="text-xl font-bold mb-6 text-gray-800 dark:text-gray-100">
                    "Contact Information"
                </h3>
                <div class="space-y-4">
                    {items
                        .into_iter()
                        .map(|(icon, heading, href, label, external)| {
                            view! {
                                <div class="flex items-start">
                                    <div class="mt-1 mr-4 w-9 h-9 flex items-center justify-center bg-blue-100 dark:bg-blue-900/30 text-blue-600 dark:text-blue-400 rounded-full">
                                        {icon}
                                    </div>
                                    <div>
                                        <h4 class="font-medium text-gray-700 dark:text-gray-300">
                                            {heading}
                                        </h4>
                                        <a
                                            href=href
                                            target=external.then_some("_blank")
                                            rel=external.then_some("noopener noreferrer")
                                            class="text-blue-600 dark:text-blue-400 hover:underline"
                                        >
                                            {label}
                                        </a>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let config = form.with_untracked(|f| f.config());

    // both timers are cleared if the section is torn down while pending
    let UseTimeoutFnReturn {
        start: start_hide, ..
    } = use_timeout_fn(
        move |ticket: SuccessTicket| {
            form.try_update(|f| f.dismiss_success(ticket));
        },
        config.success_window.as_millis() as f64,
    );

    let UseTimeoutFnReturn {
        start: start_delivery,
        ..
    } = use_timeout_fn(
        move |_: ()| match form.try_update(|f| f.deliver()) {
            Some(Delivery::Delivered { ticket, .. }) => start_hide(ticket),
            Some(Delivery::Failed(e)) => log::error!("{e}"),
            Some(Delivery::Idle) | None => {}
        },
        config.submit_delay.as_millis() as f64,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit()) {
            Some(Ok(delay)) => {
                log::debug!("sending contact message in {delay:?}");
                start_delivery(());
            }
            Some(Err(ContactError::Invalid(errors))) => {
                log::debug!("contact form rejected: {errors}");
            }
            Some(Err(ContactError::InFlight)) | None => {}
        }
    };

    let submitting = move || form.with(|f| f.is_submitting());

    view! {
        <div class="bg-gray-50 dark:bg-gray-700 p-6 rounded-lg shadow-md">
            <h3 class="text-xl font-bold mb-6 text-gray-800 dark:text-gray-100">
                "Send Me a Message"
            </h3>

            <Show when=move || form.with(|f| f.submit_success())>
                <div class="mb-6 p-4 bg-green-100 dark:bg-green-900/30 text-green-700 dark:text-green-300 rounded-lg">
                    "Thank you! Your message has been sent successfully."
                </div>
            </Show>
            {move || {
                form.with(|f| f.delivery_error().map(str::to_string))
                    .map(|e| {
                        view! {
                            <div class="mb-6 p-4 bg-red-100 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded-lg">
                                {e}
                            </div>
                        }
                    })
            }}

            <form on:submit=on_submit novalidate=true>
                <div class="space-y-4">
                    <FormField form field=Field::Name label="Your Name" />
                    <FormField form field=Field::Email label="Your Email" />
                    <FormField form field=Field::Message label="Your Message" />
                    <button
                        type="submit"
                        disabled=submitting
                        class=move || {
                            format!(
                                "w-full px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg transition-colors shadow-md hover:shadow-lg font-medium flex items-center justify-center {}",
                                if submitting() { "opacity-70 cursor-not-allowed" } else { "" },
                            )
                        }
                    >
                        {move || {
                            if submitting() {
                                Either::Left(
                                    view! {
                                        <span class="flex items-center">
                                            <span class="animate-spin -ml-1 mr-2 h-4 w-4 rounded-full border-2 border-white border-t-transparent"></span>
                                            "Sending..."
                                        </span>
                                    },
                                )
                            } else {
                                Either::Right(
                                    view! {
                                        <span class="flex items-center">
                                            <span class="mr-2">"➤"</span>
                                            "Send Message"
                                        </span>
                                    },
                                )
                            }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field, label: &'static str) -> impl IntoView {
    let id = field.as_str();
    let value = move || form.with(|f| f.field(field).to_string());
    let error = move || form.with(|f| f.error(field));
    let class = move || {
        format!(
            "w-full px-4 py-2 rounded-lg border {} bg-white dark:bg-gray-800 text-gray-800 dark:text-gray-200 focus:outline-none focus:ring-2 focus:ring-blue-500",
            if error().is_some() {
                "border-red-500 dark:border-red-500"
            } else {
                "border-gray-300 dark:border-gray-600"
            },
        )
    };
    let set_value = move |value: String| form.update(|f| f.set_field(field, value));
    let input_type = if field == Field::Email { "email" } else { "text" };

    let input = match field {
        Field::Message => Either::Left(view! {
            <textarea
                id=id
                name=id
                rows=5
                prop:value=value
                class=class
                on:input=move |ev| set_value(event_target_value(&ev))
            ></textarea>
        }),
        Field::Name | Field::Email => Either::Right(view! {
            <input
                type=input_type
                id=id
                name=id
                prop:value=value
                class=class
                on:input=move |ev| set_value(event_target_value(&ev))
            />
        }),
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                {label}
            </label>
            {input}
            {move || {
                error().map(|e| view! { <p class="mt-1 text-sm text-red-500">{e.to_string()}</p> })
            }}
        </div>
    }
}
