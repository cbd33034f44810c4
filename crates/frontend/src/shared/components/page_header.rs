use leptos::prelude::*;

/// Шапка списочной страницы: заголовок, подзаголовок, блок действий
#[component]
pub fn PageHeader(
    /// Заголовок страницы
    #[prop(into)]
    title: String,

    /// Подзаголовок (опционально)
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Действия справа от заголовка
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header" style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;">
            <div class="page-header__text">
                <h1 class="page-header__title" style="margin: 0; font-size: 24px;">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle" style="color: #666; font-size: 13px; margin-top: 4px;">{s}</div>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
