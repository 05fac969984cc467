//! Markup for one slide body.

use leptos::prelude::*;

use deckview::render::SlideView;

#[component]
pub fn SlideContent(slide: SlideView) -> impl IntoView {
    match slide {
        SlideView::Title { title, subtitle } => view! {
            <div class="slide slide--title">
                <h1 class="slide__title">{title}</h1>
                <p class="slide__subtitle">{subtitle}</p>
            </div>
        }
        .into_any(),
        SlideView::Bullets { title, points } => view! {
            <div class="slide slide--bullets">
                <h3 class="slide__title">{title}</h3>
                <ul class="slide__points">
                    {points.into_iter().map(|point| view! { <li>{point}</li> }).collect::<Vec<_>>()}
                </ul>
            </div>
        }
        .into_any(),
        SlideView::Table { title, header, rows } => view! {
            <div class="slide slide--table">
                <h3 class="slide__title">{title}</h3>
                <table class="slide__table">
                    <thead>
                        <tr>{header.into_iter().map(|cell| view! { <th>{cell}</th> }).collect::<Vec<_>>()}</tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>{row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect::<Vec<_>>()}</tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        }
        .into_any(),
    }
}
