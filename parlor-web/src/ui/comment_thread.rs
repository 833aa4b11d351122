use std::rc::Rc;

use parlor_client::{
    api::{Comment, CommentId},
    ThreadDump,
};
use yew::prelude::*;

use crate::{ui, SessionInfo};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentThreadProps {
    pub thread: Rc<ThreadDump>,
    pub session: SessionInfo,
    pub on_update: Callback<Comment>,
    pub on_delete: Callback<CommentId>,
}

#[function_component(CommentThread)]
pub fn comment_thread(p: &CommentThreadProps) -> Html {
    html! {
        <div class="comment-thread">
            { for p.thread.comments.iter().map(|c| html! {
                <ui::CommentNode
                    key={c.id.0.to_string()}
                    comment={c.clone()}
                    session={p.session.clone()}
                    on_update={p.on_update.clone()}
                    on_delete={p.on_delete.clone()}
                />
            }) }
        </div>
    }
}
